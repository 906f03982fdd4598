// src/presentation/http/controllers/media.rs
use crate::{
    application::{
        commands::media::{
            CreateAlbumCommand, RejectMediaCommand, ShareMediaCommand, UploadMediaCommand,
        },
        dto::{AlbumDto, MediaItemDto, ShareLinkDto, SharedFileDto},
        queries::media::MediaSearchQuery,
    },
    domain::media::MediaKind,
    presentation::http::{
        error::{HttpError, HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAlbumRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadMediaRequest {
    pub filename: String,
    /// File contents, standard base64.
    pub content: String,
    /// `photo` or `video`; inferred from the extension when omitted.
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub album_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RejectMediaRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ShareMediaRequest {
    #[serde(default)]
    pub expiry_hours: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MediaSearchParams {
    pub q: Option<String>,
    pub album_id: Option<Uuid>,
    /// Comma separated.
    pub tags: Option<String>,
}

fn parse_kind(raw: &str) -> HttpResult<MediaKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "photo" => Ok(MediaKind::Photo),
        "video" => Ok(MediaKind::Video),
        other => Err(HttpError::bad_request(format!("unknown media kind '{other}'"))),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/albums",
    responses((status = 200, body = [AlbumDto])),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn list_albums(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<AlbumDto>>> {
    state
        .services
        .media_queries
        .albums(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/albums",
    request_body = CreateAlbumRequest,
    responses((status = 201, body = AlbumDto), (status = 409)),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn create_album(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateAlbumRequest>,
) -> HttpResult<(StatusCode, Json<AlbumDto>)> {
    let command = CreateAlbumCommand {
        name: payload.name,
        description: payload.description,
    };
    let album = state
        .services
        .media
        .create_album(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(album)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/albums/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn delete_album(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .media
        .delete_album(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/media",
    params(MediaSearchParams),
    responses((status = 200, body = [MediaItemDto])),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<MediaSearchParams>,
) -> HttpResult<Json<Vec<MediaItemDto>>> {
    let tags = params
        .tags
        .map(|raw| raw.split(',').map(|t| t.trim().to_string()).collect())
        .unwrap_or_default();
    let query = MediaSearchQuery {
        query: params.q,
        album_id: params.album_id,
        tags,
    };
    state
        .services
        .media_queries
        .search(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/media/pending",
    responses((status = 200, body = [MediaItemDto]), (status = 403)),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn pending(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<MediaItemDto>>> {
    state
        .services
        .media_queries
        .pending(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/media",
    request_body = UploadMediaRequest,
    responses((status = 201, body = MediaItemDto), (status = 400)),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn upload(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UploadMediaRequest>,
) -> HttpResult<(StatusCode, Json<MediaItemDto>)> {
    let bytes = STANDARD
        .decode(payload.content.trim())
        .map_err(|e| HttpError::bad_request(format!("content is not valid base64: {e}")))?;
    let kind = payload.kind.as_deref().map(parse_kind).transpose()?;
    let command = UploadMediaCommand {
        filename: payload.filename,
        bytes,
        kind,
        album_id: payload.album_id,
        tags: payload.tags,
        metadata: payload.metadata,
    };
    let item = state
        .services
        .media
        .register_upload(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/media/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn delete_media(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .media
        .delete_media(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/media/{id}/approve",
    params(("id" = Uuid, Path)),
    responses((status = 200, body = MediaItemDto), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn approve(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<MediaItemDto>> {
    state
        .services
        .media
        .approve(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/media/{id}/reject",
    params(("id" = Uuid, Path)),
    request_body = RejectMediaRequest,
    responses((status = 204), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn reject(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<RejectMediaRequest>,
) -> HttpResult<StatusCode> {
    let command = RejectMediaCommand {
        id,
        reason: payload.reason,
    };
    state
        .services
        .media
        .reject(&user, command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/media/{id}/share",
    params(("id" = Uuid, Path)),
    request_body = ShareMediaRequest,
    responses((status = 201, body = ShareLinkDto), (status = 404)),
    security(("basicAuth" = [])),
    tag = "Media"
)]
pub async fn share(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<ShareMediaRequest>,
) -> HttpResult<(StatusCode, Json<ShareLinkDto>)> {
    let command = ShareMediaCommand {
        media_id: id,
        expiry_hours: payload.expiry_hours,
    };
    let link = state.services.media.share(&user, command).await.into_http()?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Public: the token is the credential.
#[utoipa::path(
    get,
    path = "/api/v1/share/{token}",
    params(("token" = String, Path)),
    responses((status = 200, body = SharedFileDto), (status = 404)),
    tag = "Media"
)]
pub async fn resolve_share(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
) -> HttpResult<Json<SharedFileDto>> {
    state
        .services
        .media_queries
        .resolve_share(&token)
        .await
        .into_http()
        .map(Json)
}
