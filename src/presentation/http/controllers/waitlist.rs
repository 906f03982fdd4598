// src/presentation/http/controllers/waitlist.rs
use super::parse_day;
use crate::{
    application::{
        commands::waitlist::{CancelWaitlistEntryCommand, JoinWaitlistCommand},
        dto::WaitlistEntryDto,
    },
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct JoinWaitlistRequest {
    pub room: String,
    pub day: String,
    pub slot: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/waitlist",
    request_body = JoinWaitlistRequest,
    responses((status = 201, body = WaitlistEntryDto), (status = 409)),
    security(("basicAuth" = [])),
    tag = "Waitlist"
)]
pub async fn join(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<JoinWaitlistRequest>,
) -> HttpResult<(StatusCode, Json<WaitlistEntryDto>)> {
    let command = JoinWaitlistCommand {
        room: payload.room,
        day: parse_day(payload.day)?,
        slot: payload.slot,
    };
    let entry = state.services.waitlist.join(&user, command).await.into_http()?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    get,
    path = "/api/v1/waitlist/mine",
    responses((status = 200, body = [WaitlistEntryDto])),
    security(("basicAuth" = [])),
    tag = "Waitlist"
)]
pub async fn mine(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<WaitlistEntryDto>>> {
    state
        .services
        .waitlist_queries
        .waiting_for(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/waitlist/{id}",
    params(("id" = String, Path, description = "Waitlist entry id")),
    responses((status = 200, body = WaitlistEntryDto), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Waitlist"
)]
pub async fn leave(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<WaitlistEntryDto>> {
    state
        .services
        .waitlist
        .cancel_entry(&user, CancelWaitlistEntryCommand { id })
        .await
        .into_http()
        .map(Json)
}
