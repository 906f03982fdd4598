use super::MediaQueryService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AlbumDto, AuthenticatedUser, MediaItemDto},
        error::ApplicationResult,
    },
    domain::media::MediaSearch,
};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct MediaSearchQuery {
    pub query: Option<String>,
    pub album_id: Option<Uuid>,
    pub tags: Vec<String>,
}

impl MediaQueryService {
    pub async fn albums(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<AlbumDto>> {
        ensure_capability(actor, "media", "read")?;
        let index = self.repo.load().await?;
        Ok(index.albums.into_iter().map(Into::into).collect())
    }

    /// Published items only; pending uploads are not searchable.
    pub async fn search(
        &self,
        actor: &AuthenticatedUser,
        query: MediaSearchQuery,
    ) -> ApplicationResult<Vec<MediaItemDto>> {
        ensure_capability(actor, "media", "read")?;
        let index = self.repo.load().await?;
        let criteria = MediaSearch {
            query: query.query,
            album_id: query.album_id,
            tags: query.tags,
        };
        Ok(index
            .search(&criteria)
            .into_iter()
            .map(|item| MediaItemDto::new(item, true))
            .collect())
    }

    /// Uploads waiting for review.
    pub async fn pending(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<MediaItemDto>> {
        ensure_capability(actor, "media", "approve")?;
        let index = self.repo.load().await?;
        Ok(index
            .pending_approval
            .into_iter()
            .map(|item| MediaItemDto::new(item, false))
            .collect())
    }
}
