// src/application/ports/media_files.rs
use crate::application::ApplicationResult;
use crate::domain::media::StoredName;
use async_trait::async_trait;

/// Blob storage for uploaded media, addressed by paths relative to the
/// uploads root such as `photos/stage.jpg`.
#[async_trait]
pub trait MediaFileStore: Send + Sync {
    /// Stores `bytes` under a collision-free variant of `name`, returning
    /// the file name actually used.
    async fn save(&self, name: &StoredName, bytes: &[u8]) -> ApplicationResult<String>;

    /// Removing a file that is already gone is not an error.
    async fn remove(&self, relative_path: &str) -> ApplicationResult<()>;

    async fn exists(&self, relative_path: &str) -> bool;
}
