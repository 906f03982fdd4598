// src/domain/media/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::value_objects::MediaKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub creator: String,
    #[serde(with = "crate::domain::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub media_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: Uuid,
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub album_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub uploader: String,
    #[serde(with = "crate::domain::timestamp")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub views: u64,
}

impl MediaItem {
    /// Path of the stored file relative to the uploads root.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.kind.dir_name(), self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub token: String,
    pub media_id: Uuid,
    pub file_path: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Criteria for `MediaIndex::search`; unset fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct MediaSearch {
    pub query: Option<String>,
    pub album_id: Option<Uuid>,
    /// Matches items carrying at least one of these tags.
    pub tags: Vec<String>,
}

/// The whole of `media_index.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaIndex {
    pub albums: Vec<Album>,
    pub media: Vec<MediaItem>,
    pub tags: Vec<String>,
    pub shares: Vec<ShareRecord>,
    pub pending_approval: Vec<MediaItem>,
}

impl MediaIndex {
    pub fn album(&self, id: Uuid) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == id)
    }

    pub fn find_media(&self, id: Uuid) -> Option<&MediaItem> {
        self.media.iter().find(|m| m.id == id)
    }

    pub fn find_pending(&self, id: Uuid) -> Option<&MediaItem> {
        self.pending_approval.iter().find(|m| m.id == id)
    }

    pub fn add_album(&mut self, album: Album) -> DomainResult<()> {
        if self
            .albums
            .iter()
            .any(|a| a.name.eq_ignore_ascii_case(&album.name))
        {
            return Err(DomainError::Conflict(format!(
                "album '{}' already exists",
                album.name
            )));
        }
        self.albums.push(album);
        Ok(())
    }

    /// Files `item` either for review or straight into the catalogue.
    /// Tags are de-duplicated on the item and merged into the tag list.
    pub fn register(&mut self, mut item: MediaItem, pending: bool) -> DomainResult<()> {
        if let Some(album_id) = item.album_id {
            if self.album(album_id).is_none() {
                return Err(DomainError::NotFound(format!("album {album_id}")));
            }
        }
        item.tags = dedup_tags(item.tags);
        for tag in &item.tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
        if pending {
            self.pending_approval.push(item);
        } else {
            self.publish(item);
        }
        Ok(())
    }

    pub fn approve(&mut self, id: Uuid) -> DomainResult<MediaItem> {
        let item = self.take_pending(id)?;
        self.publish(item.clone());
        Ok(item)
    }

    pub fn reject(&mut self, id: Uuid) -> DomainResult<MediaItem> {
        self.take_pending(id)
    }

    /// Removes a published or pending item.
    pub fn remove_media(&mut self, id: Uuid) -> DomainResult<MediaItem> {
        if let Some(pos) = self.media.iter().position(|m| m.id == id) {
            let item = self.media.remove(pos);
            self.adjust_album_count(item.album_id, false);
            return Ok(item);
        }
        self.take_pending(id)
    }

    /// Drops the album; its media stay in the catalogue without an album.
    pub fn remove_album(&mut self, id: Uuid) -> DomainResult<Album> {
        let pos = self
            .albums
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("album {id}")))?;
        for item in self
            .media
            .iter_mut()
            .chain(self.pending_approval.iter_mut())
            .filter(|m| m.album_id == Some(id))
        {
            item.album_id = None;
        }
        Ok(self.albums.remove(pos))
    }

    pub fn record_share(&mut self, share: ShareRecord) -> DomainResult<()> {
        if self.find_media(share.media_id).is_none() {
            return Err(DomainError::NotFound(format!("media {}", share.media_id)));
        }
        self.shares.push(share);
        Ok(())
    }

    pub fn search(&self, criteria: &MediaSearch) -> Vec<MediaItem> {
        let wanted: BTreeSet<&str> = criteria
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        let query = criteria
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        self.media
            .iter()
            .filter(|m| criteria.album_id.is_none_or(|id| m.album_id == Some(id)))
            .filter(|m| wanted.is_empty() || m.tags.iter().any(|t| wanted.contains(t.as_str())))
            .filter(|m| match &query {
                Some(q) => {
                    m.filename.to_lowercase().contains(q)
                        || m.tags.join(" ").to_lowercase().contains(q)
                }
                None => true,
            })
            .cloned()
            .collect()
    }

    fn publish(&mut self, item: MediaItem) {
        self.adjust_album_count(item.album_id, true);
        self.media.push(item);
    }

    fn take_pending(&mut self, id: Uuid) -> DomainResult<MediaItem> {
        let pos = self
            .pending_approval
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("pending media {id}")))?;
        Ok(self.pending_approval.remove(pos))
    }

    fn adjust_album_count(&mut self, album_id: Option<Uuid>, added: bool) {
        let Some(album) = album_id.and_then(|id| self.albums.iter_mut().find(|a| a.id == id))
        else {
            return;
        };
        album.media_count = if added {
            album.media_count + 1
        } else {
            album.media_count.saturating_sub(1)
        };
    }
}

fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}
