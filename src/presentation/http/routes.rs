// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{admin, audit, bookings, calendar, faculty, finder, media, notifications, waitlist},
    openapi::{self, StatusResponse},
    state::HttpState,
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// `allowed_origins` empty means any origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .route("/api/v1/me", get(admin::me))
        .route("/api/v1/rooms", get(bookings::list_rooms))
        .route("/api/v1/rooms/{room}/days/{day}", get(bookings::room_day))
        .route(
            "/api/v1/rooms/{room}/days/{day}/history",
            get(audit::room_day_history),
        )
        .route(
            "/api/v1/rooms/{room}/days/{day}/slots/{slot}/history",
            get(audit::slot_history),
        )
        .route("/api/v1/bookings", post(bookings::book))
        .route("/api/v1/bookings/cancel", post(bookings::cancel))
        .route("/api/v1/bookings/mine", get(bookings::my_history))
        .route("/api/v1/waitlist", post(waitlist::join))
        .route("/api/v1/waitlist/mine", get(waitlist::mine))
        .route("/api/v1/waitlist/{id}", delete(waitlist::leave))
        .route("/api/v1/finder", post(finder::find_free))
        .route("/api/v1/finder/slots/{day}", get(finder::slots))
        .route("/api/v1/faculty", get(faculty::list_faculty))
        .route(
            "/api/v1/faculty/{name}/days/{day}",
            get(faculty::faculty_day),
        )
        .route(
            "/api/v1/calendar/saturdays/{year}/{month}",
            get(calendar::month_saturdays),
        )
        .route(
            "/api/v1/notifications",
            get(notifications::list).delete(notifications::clear),
        )
        .route(
            "/api/v1/notifications/preferences",
            get(notifications::preferences).put(notifications::save_preferences),
        )
        .route(
            "/api/v1/notifications/{id}/read",
            post(notifications::mark_read),
        )
        .route("/api/v1/audit", get(audit::list_events))
        .route("/api/v1/admin/overview", get(admin::overview))
        .route(
            "/api/v1/admin/settings",
            get(admin::settings).put(admin::update_settings),
        )
        .route("/api/v1/admin/users", post(admin::add_user))
        .route("/api/v1/admin/users/{email}", delete(admin::delete_user))
        .route(
            "/api/v1/albums",
            get(media::list_albums).post(media::create_album),
        )
        .route("/api/v1/albums/{id}", delete(media::delete_album))
        .route("/api/v1/media", get(media::search).post(media::upload))
        .route("/api/v1/media/pending", get(media::pending))
        .route("/api/v1/media/{id}", delete(media::delete_media))
        .route("/api/v1/media/{id}/approve", post(media::approve))
        .route("/api/v1/media/{id}/reject", post(media::reject))
        .route("/api/v1/media/{id}/share", post(media::share))
        .route("/api/v1/share/{token}", get(media::resolve_share))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service health check.", body = StatusResponse)),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
