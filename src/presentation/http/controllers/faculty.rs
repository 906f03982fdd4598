// src/presentation/http/controllers/faculty.rs
use super::parse_day;
use crate::{
    application::dto::FacultyDayDto,
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/faculty",
    responses((status = 200, body = [String])),
    security(("basicAuth" = [])),
    tag = "Faculty"
)]
pub async fn list_faculty(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<String>>> {
    state
        .services
        .faculty_queries
        .list_faculty(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/faculty/{name}/days/{day}",
    params(
        ("name" = String, Path, description = "Faculty member"),
        ("day" = String, Path, description = "ISO date or day label"),
    ),
    responses((status = 200, body = FacultyDayDto), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Faculty"
)]
pub async fn faculty_day(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((name, day)): Path<(String, String)>,
) -> HttpResult<Json<FacultyDayDto>> {
    let day = parse_day(day)?;
    state
        .services
        .faculty_queries
        .faculty_day(&user, &name, day)
        .await
        .into_http()
        .map(Json)
}
