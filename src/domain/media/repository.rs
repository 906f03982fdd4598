// src/domain/media/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::media::entity::{Album, MediaIndex, MediaItem, ShareRecord};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn load(&self) -> DomainResult<MediaIndex>;

    async fn insert_album(&self, album: Album) -> DomainResult<()>;

    /// Adds `item` to the pending queue or straight to the catalogue.
    async fn insert_media(&self, item: MediaItem, pending: bool) -> DomainResult<()>;

    async fn approve(&self, id: Uuid) -> DomainResult<MediaItem>;

    async fn reject(&self, id: Uuid) -> DomainResult<MediaItem>;

    async fn delete_media(&self, id: Uuid) -> DomainResult<MediaItem>;

    async fn delete_album(&self, id: Uuid) -> DomainResult<Album>;

    async fn record_share(&self, share: ShareRecord) -> DomainResult<()>;
}
