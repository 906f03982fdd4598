// src/application/dto/media.rs
use crate::domain::media::{Album, MediaItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlbumDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
    pub media_count: usize,
}

impl From<Album> for AlbumDto {
    fn from(a: Album) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            creator: a.creator,
            created_at: a.created_at,
            media_count: a.media_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaItemDto {
    pub id: Uuid,
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<Uuid>,
    pub tags: Vec<String>,
    pub metadata: serde_json::Value,
    pub uploader: String,
    pub uploaded_at: DateTime<Utc>,
    /// False while the item waits for approval.
    pub approved: bool,
}

impl MediaItemDto {
    pub fn new(item: MediaItem, approved: bool) -> Self {
        Self {
            path: item.relative_path(),
            id: item.id,
            filename: item.filename,
            kind: item.kind.to_string(),
            album_id: item.album_id,
            tags: item.tags,
            metadata: item.metadata,
            uploader: item.uploader,
            uploaded_at: item.uploaded_at,
            approved,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShareLinkDto {
    pub token: String,
    pub media_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub expiry_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SharedFileDto {
    pub file_path: String,
    pub expires_at: DateTime<Utc>,
}
