// src/infrastructure/repositories/json_media.rs
use super::MEDIA_INDEX_FILE;
use crate::domain::errors::DomainResult;
use crate::domain::media::{Album, MediaIndex, MediaItem, MediaRepository, ShareRecord};
use crate::infrastructure::json_store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct JsonMediaRepository {
    store: Arc<JsonStore>,
}

impl JsonMediaRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MediaRepository for JsonMediaRepository {
    async fn load(&self) -> DomainResult<MediaIndex> {
        self.store.read(MEDIA_INDEX_FILE).await
    }

    async fn insert_album(&self, album: Album) -> DomainResult<()> {
        self.store
            .update(MEDIA_INDEX_FILE, move |index: &mut MediaIndex| {
                index.add_album(album)
            })
            .await
    }

    async fn insert_media(&self, item: MediaItem, pending: bool) -> DomainResult<()> {
        self.store
            .update(MEDIA_INDEX_FILE, move |index: &mut MediaIndex| {
                index.register(item, pending)
            })
            .await
    }

    async fn approve(&self, id: Uuid) -> DomainResult<MediaItem> {
        self.store
            .update(MEDIA_INDEX_FILE, |index: &mut MediaIndex| index.approve(id))
            .await
    }

    async fn reject(&self, id: Uuid) -> DomainResult<MediaItem> {
        self.store
            .update(MEDIA_INDEX_FILE, |index: &mut MediaIndex| index.reject(id))
            .await
    }

    async fn delete_media(&self, id: Uuid) -> DomainResult<MediaItem> {
        self.store
            .update(MEDIA_INDEX_FILE, |index: &mut MediaIndex| index.remove_media(id))
            .await
    }

    async fn delete_album(&self, id: Uuid) -> DomainResult<Album> {
        self.store
            .update(MEDIA_INDEX_FILE, |index: &mut MediaIndex| index.remove_album(id))
            .await
    }

    async fn record_share(&self, share: ShareRecord) -> DomainResult<()> {
        self.store
            .update(MEDIA_INDEX_FILE, move |index: &mut MediaIndex| {
                index.record_share(share)
            })
            .await
    }
}
