// src/presentation/http/controllers/admin.rs
use crate::{
    application::{
        commands::{
            auth::{AddUserCommand, DeleteUserCommand},
            settings::UpdateSettingsCommand,
        },
        dto::{AdminOverviewDto, SettingsTogglesDto, UserDto},
    },
    domain::user::Role,
    presentation::http::{
        error::{HttpError, HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddUserRequest {
    pub email: String,
    pub password: String,
    /// `student` or `teacher`.
    pub role: String,
}

/// Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateSettingsRequest {
    pub email_notifications: Option<bool>,
    pub telegram_notifications: Option<bool>,
    pub thumbnails: Option<bool>,
    pub media_approval: Option<bool>,
    pub saturdays: Option<bool>,
    pub exclude_third_saturday: Option<bool>,
}

impl From<UpdateSettingsRequest> for UpdateSettingsCommand {
    fn from(r: UpdateSettingsRequest) -> Self {
        Self {
            email_notifications: r.email_notifications,
            telegram_notifications: r.telegram_notifications,
            thumbnails: r.thumbnails,
            media_approval: r.media_approval,
            saturdays: r.saturdays,
            exclude_third_saturday: r.exclude_third_saturday,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses((status = 200, body = UserDto), (status = 401)),
    security(("basicAuth" = [])),
    tag = "Users"
)]
pub async fn me(Authenticated(user): Authenticated) -> Json<UserDto> {
    Json(UserDto::from(&user))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/overview",
    responses((status = 200, body = AdminOverviewDto), (status = 403)),
    security(("basicAuth" = [])),
    tag = "Admin"
)]
pub async fn overview(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<AdminOverviewDto>> {
    state
        .services
        .admin
        .overview(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/users",
    request_body = AddUserRequest,
    responses((status = 201, body = UserDto), (status = 409)),
    security(("basicAuth" = [])),
    tag = "Users"
)]
pub async fn add_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<AddUserRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let role: Role = payload.role.parse().map_err(HttpError::from_domain)?;
    let command = AddUserCommand {
        email: payload.email,
        password: payload.password,
        role,
    };
    let created = state.services.auth.add_user(&user, command).await.into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/users/{email}",
    params(("email" = String, Path)),
    responses((status = 204), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(email): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .auth
        .delete_user(&user, DeleteUserCommand { email })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/settings",
    responses((status = 200, body = SettingsTogglesDto), (status = 403)),
    security(("basicAuth" = [])),
    tag = "Admin"
)]
pub async fn settings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<SettingsTogglesDto>> {
    state
        .services
        .settings
        .current(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/settings",
    request_body = UpdateSettingsRequest,
    responses((status = 200, body = SettingsTogglesDto), (status = 403)),
    security(("basicAuth" = [])),
    tag = "Admin"
)]
pub async fn update_settings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateSettingsRequest>,
) -> HttpResult<Json<SettingsTogglesDto>> {
    state
        .services
        .settings
        .update(&user, payload.into())
        .await
        .into_http()
        .map(Json)
}
