// src/presentation/http/controllers/calendar.rs
use crate::{
    application::dto::MonthSaturdaysDto,
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/calendar/saturdays/{year}/{month}",
    params(
        ("year" = i32, Path),
        ("month" = u32, Path, description = "1-12"),
    ),
    responses((status = 200, body = MonthSaturdaysDto), (status = 400)),
    security(("basicAuth" = [])),
    tag = "Calendar"
)]
pub async fn month_saturdays(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path((year, month)): Path<(i32, u32)>,
) -> HttpResult<Json<MonthSaturdaysDto>> {
    state
        .services
        .calendar
        .month_saturdays(year, month)
        .into_http()
        .map(Json)
}
