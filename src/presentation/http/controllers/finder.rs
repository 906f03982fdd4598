// src/presentation/http/controllers/finder.rs
use super::parse_day;
use crate::{
    application::{dto::FinderResultDto, queries::finder::FindFreeRoomsQuery},
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct FindFreeRoomsRequest {
    pub day: String,
    pub slots: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/finder",
    request_body = FindFreeRoomsRequest,
    responses((status = 200, body = FinderResultDto), (status = 400)),
    security(("basicAuth" = [])),
    tag = "Finder"
)]
pub async fn find_free(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<FindFreeRoomsRequest>,
) -> HttpResult<Json<FinderResultDto>> {
    let query = FindFreeRoomsQuery {
        day: parse_day(payload.day)?,
        slots: payload.slots,
    };
    state
        .services
        .finder
        .find_free(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/finder/slots/{day}",
    params(("day" = String, Path, description = "ISO date or day label")),
    responses((status = 200, body = [String])),
    security(("basicAuth" = [])),
    tag = "Finder"
)]
pub async fn slots(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(day): Path<String>,
) -> HttpResult<Json<Vec<String>>> {
    let day = parse_day(day)?;
    state
        .services
        .finder
        .slot_catalogue(&user, day)
        .await
        .into_http()
        .map(Json)
}
