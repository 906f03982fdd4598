// src/presentation/http/controllers/notifications.rs
use crate::{
    application::dto::{NotificationListDto, PreferencesDto},
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
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClearedResponse {
    pub removed: usize,
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    params(NotificationParams),
    responses((status = 200, body = NotificationListDto)),
    security(("basicAuth" = [])),
    tag = "Notifications"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<NotificationParams>,
) -> HttpResult<Json<NotificationListDto>> {
    state
        .services
        .notification_queries
        .list_for(&user, params.limit)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    params(("id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Notifications"
)]
pub async fn mark_read(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .notifications
        .mark_read(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/notifications",
    responses((status = 200, body = ClearedResponse)),
    security(("basicAuth" = [])),
    tag = "Notifications"
)]
pub async fn clear(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ClearedResponse>> {
    let removed = state
        .services
        .notifications
        .clear(&user)
        .await
        .into_http()?;
    Ok(Json(ClearedResponse { removed }))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/preferences",
    responses((status = 200, body = PreferencesDto)),
    security(("basicAuth" = [])),
    tag = "Notifications"
)]
pub async fn preferences(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<PreferencesDto>> {
    state
        .services
        .notification_queries
        .preferences(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/notifications/preferences",
    request_body = PreferencesDto,
    responses((status = 200, body = PreferencesDto)),
    security(("basicAuth" = [])),
    tag = "Notifications"
)]
pub async fn save_preferences(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<PreferencesDto>,
) -> HttpResult<Json<PreferencesDto>> {
    state
        .services
        .notifications
        .save_preferences(&user, payload)
        .await
        .into_http()
        .map(Json)
}
