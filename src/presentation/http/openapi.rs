// src/presentation/http/openapi.rs
use crate::{
    application::dto::{
        AdminOverviewDto, AlbumDto, AuditEventDto, BookingHistoryDto, BookingOutcomeDto,
        CancellationDto, ExpiredSlotDto, FacultyDayDto, FinderResultDto, MediaItemDto,
        MonthSaturdaysDto, NotificationDto, NotificationListDto, PartialMatchDto, PreferencesDto,
        RoomDayDto, RoomMatchDto, RoomSummaryDto, SaturdayDto, ShareLinkDto, SharedFileDto,
        SettingsTogglesDto, SlotDto, UserDto, WaitlistEntryDto,
    },
    presentation::http::{
        controllers::{
            admin::{AddUserRequest, UpdateSettingsRequest},
            bookings::{BookSlotRequest, CancelBookingRequest},
            finder::FindFreeRoomsRequest,
            media::{CreateAlbumRequest, RejectMediaRequest, ShareMediaRequest, UploadMediaRequest},
            notifications::ClearedResponse,
            waitlist::JoinWaitlistRequest,
        },
        error::ErrorResponse,
    },
};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{
    Modify, OpenApi, ToSchema,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Portal API",
        description = "Room booking, waitlists, free-room search and media for a campus portal."
    ),
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::admin::me,
        crate::presentation::http::controllers::admin::overview,
        crate::presentation::http::controllers::admin::add_user,
        crate::presentation::http::controllers::admin::delete_user,
        crate::presentation::http::controllers::admin::settings,
        crate::presentation::http::controllers::admin::update_settings,
        crate::presentation::http::controllers::bookings::list_rooms,
        crate::presentation::http::controllers::bookings::room_day,
        crate::presentation::http::controllers::bookings::book,
        crate::presentation::http::controllers::bookings::cancel,
        crate::presentation::http::controllers::bookings::my_history,
        crate::presentation::http::controllers::audit::list_events,
        crate::presentation::http::controllers::audit::room_day_history,
        crate::presentation::http::controllers::audit::slot_history,
        crate::presentation::http::controllers::waitlist::join,
        crate::presentation::http::controllers::waitlist::mine,
        crate::presentation::http::controllers::waitlist::leave,
        crate::presentation::http::controllers::finder::find_free,
        crate::presentation::http::controllers::finder::slots,
        crate::presentation::http::controllers::faculty::list_faculty,
        crate::presentation::http::controllers::faculty::faculty_day,
        crate::presentation::http::controllers::calendar::month_saturdays,
        crate::presentation::http::controllers::notifications::list,
        crate::presentation::http::controllers::notifications::mark_read,
        crate::presentation::http::controllers::notifications::clear,
        crate::presentation::http::controllers::notifications::preferences,
        crate::presentation::http::controllers::notifications::save_preferences,
        crate::presentation::http::controllers::media::list_albums,
        crate::presentation::http::controllers::media::create_album,
        crate::presentation::http::controllers::media::delete_album,
        crate::presentation::http::controllers::media::search,
        crate::presentation::http::controllers::media::pending,
        crate::presentation::http::controllers::media::upload,
        crate::presentation::http::controllers::media::delete_media,
        crate::presentation::http::controllers::media::approve,
        crate::presentation::http::controllers::media::reject,
        crate::presentation::http::controllers::media::share,
        crate::presentation::http::controllers::media::resolve_share,
    ),
    components(schemas(
        StatusResponse,
        ErrorResponse,
        UserDto,
        AddUserRequest,
        AdminOverviewDto,
        SettingsTogglesDto,
        UpdateSettingsRequest,
        AuditEventDto,
        RoomSummaryDto,
        RoomDayDto,
        SlotDto,
        ExpiredSlotDto,
        BookSlotRequest,
        BookingOutcomeDto,
        CancelBookingRequest,
        CancellationDto,
        BookingHistoryDto,
        JoinWaitlistRequest,
        WaitlistEntryDto,
        FindFreeRoomsRequest,
        FinderResultDto,
        RoomMatchDto,
        PartialMatchDto,
        FacultyDayDto,
        MonthSaturdaysDto,
        SaturdayDto,
        NotificationDto,
        NotificationListDto,
        PreferencesDto,
        ClearedResponse,
        AlbumDto,
        CreateAlbumRequest,
        MediaItemDto,
        UploadMediaRequest,
        RejectMediaRequest,
        ShareMediaRequest,
        ShareLinkDto,
        SharedFileDto,
    )),
    modifiers(&BasicAuthScheme),
    tags(
        (name = "System"),
        (name = "Bookings", description = "Room schedules and slot bookings"),
        (name = "Waitlist"),
        (name = "Finder", description = "Free room search"),
        (name = "Faculty"),
        (name = "Calendar"),
        (name = "Notifications"),
        (name = "Media", description = "Albums, uploads, approval and share links"),
        (name = "Audit"),
        (name = "Admin"),
    )
)]
pub struct ApiDoc;

struct BasicAuthScheme;

impl Modify for BasicAuthScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "basicAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_booking_routes_and_basic_auth() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/v1/bookings"));
        assert!(paths.contains_key("/api/v1/rooms/{room}/days/{day}"));
        assert!(paths.contains_key("/api/v1/share/{token}"));
        assert_eq!(
            doc["components"]["securitySchemes"]["basicAuth"]["scheme"],
            "basic"
        );
    }
}
