// src/presentation/http/controllers/bookings.rs
use super::parse_day;
use crate::{
    application::{
        commands::bookings::{BookSlotCommand, CancelBookingCommand, RoomDayQuery},
        dto::{BookingHistoryDto, BookingOutcomeDto, CancellationDto, RoomDayDto, RoomSummaryDto},
    },
    domain::booking::BookingDetails,
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookSlotRequest {
    pub room: String,
    /// ISO date (`2025-03-15`) or day label (`Monday`).
    pub day: String,
    pub slot: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub attendees: u32,
    #[serde(default)]
    pub notify: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CancelBookingRequest {
    pub room: String,
    pub day: String,
    pub slot: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    responses((status = 200, body = [RoomSummaryDto])),
    security(("basicAuth" = [])),
    tag = "Bookings"
)]
pub async fn list_rooms(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<RoomSummaryDto>>> {
    state
        .services
        .booking_queries
        .list_rooms(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room}/days/{day}",
    params(
        ("room" = String, Path, description = "Room name"),
        ("day" = String, Path, description = "ISO date or day label"),
    ),
    responses((status = 200, body = RoomDayDto), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Bookings"
)]
pub async fn room_day(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((room, day)): Path<(String, String)>,
) -> HttpResult<Json<RoomDayDto>> {
    let day = parse_day(day)?;
    state
        .services
        .bookings
        .day_view(&user, RoomDayQuery { room, day })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    request_body = BookSlotRequest,
    responses(
        (status = 201, body = BookingOutcomeDto),
        (status = 409, description = "Slot was booked by someone else"),
    ),
    security(("basicAuth" = [])),
    tag = "Bookings"
)]
pub async fn book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BookSlotRequest>,
) -> HttpResult<(StatusCode, Json<BookingOutcomeDto>)> {
    let command = BookSlotCommand {
        room: payload.room,
        day: parse_day(payload.day)?,
        slot: payload.slot,
        details: BookingDetails {
            title: payload.title,
            purpose: payload.purpose,
            attendees: payload.attendees,
            notify: payload.notify,
        },
    };
    let outcome = state.services.bookings.book(&user, command).await.into_http()?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/cancel",
    request_body = CancelBookingRequest,
    responses((status = 200, body = CancellationDto), (status = 400)),
    security(("basicAuth" = [])),
    tag = "Bookings"
)]
pub async fn cancel(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CancelBookingRequest>,
) -> HttpResult<Json<CancellationDto>> {
    let command = CancelBookingCommand {
        room: payload.room,
        day: parse_day(payload.day)?,
        slot: payload.slot,
        reason: payload.reason,
    };
    state
        .services
        .bookings
        .cancel(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/mine",
    params(HistoryParams),
    responses((status = 200, body = [BookingHistoryDto])),
    security(("basicAuth" = [])),
    tag = "Bookings"
)]
pub async fn my_history(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<HistoryParams>,
) -> HttpResult<Json<Vec<BookingHistoryDto>>> {
    state
        .services
        .booking_queries
        .my_history(&user, params.limit)
        .await
        .into_http()
        .map(Json)
}
