// src/presentation/http/controllers/audit.rs
use crate::{
    application::{
        dto::AuditEventDto,
        queries::audit::{AuditHistoryQuery, RoomDayHistoryQuery},
    },
    domain::schedule::BookingKey,
    presentation::http::{
        error::{HttpError, HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditQueryParams {
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub actor: Option<String>,
    pub actor_contains: Option<String>,
    pub action: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomDayHistoryParams {
    pub actor_contains: Option<String>,
    pub action: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlotHistoryParams {
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/v1/audit",
    params(AuditQueryParams),
    responses((status = 200, body = [AuditEventDto]), (status = 403)),
    security(("basicAuth" = [])),
    tag = "Audit"
)]
pub async fn list_events(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<AuditQueryParams>,
) -> HttpResult<Json<Vec<AuditEventDto>>> {
    let query = AuditHistoryQuery {
        entity_type: params.entity_type,
        entity_id: params.entity_id,
        actor: params.actor,
        actor_contains: params.actor_contains,
        action: params.action,
        limit: params.limit,
    };
    state
        .services
        .audit_queries
        .history(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room}/days/{day}/history",
    params(
        ("room" = String, Path, description = "Room name"),
        ("day" = String, Path, description = "Day label"),
        RoomDayHistoryParams,
    ),
    responses((status = 200, body = [AuditEventDto]), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Audit"
)]
pub async fn room_day_history(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((room, day)): Path<(String, String)>,
    Query(params): Query<RoomDayHistoryParams>,
) -> HttpResult<Json<Vec<AuditEventDto>>> {
    let query = RoomDayHistoryQuery {
        room,
        day,
        actor_contains: params.actor_contains,
        action: params.action,
        limit: params.limit,
    };
    state
        .services
        .audit_queries
        .room_day_history(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room}/days/{day}/slots/{slot}/history",
    params(
        ("room" = String, Path, description = "Room name"),
        ("day" = String, Path, description = "Day label"),
        ("slot" = String, Path, description = "Slot label, e.g. 9AM-10AM"),
        SlotHistoryParams,
    ),
    responses((status = 200, body = [AuditEventDto]), (status = 400), (status = 403)),
    security(("basicAuth" = [])),
    tag = "Audit"
)]
pub async fn slot_history(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((room, day, slot)): Path<(String, String, String)>,
    Query(params): Query<SlotHistoryParams>,
) -> HttpResult<Json<Vec<AuditEventDto>>> {
    let key = BookingKey::new(room, day, slot).map_err(HttpError::from_domain)?;
    state
        .services
        .audit_queries
        .booking_history(&user, &key, params.limit)
        .await
        .into_http()
        .map(Json)
}
