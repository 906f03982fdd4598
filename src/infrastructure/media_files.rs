// src/infrastructure/media_files.rs
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::media_files::MediaFileStore,
    },
    domain::media::StoredName,
};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};
use tokio::io::AsyncWriteExt;
use tracing::debug;

const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Uploads on the local filesystem, `{root}/{photos|videos}/{name}`.
pub struct LocalMediaFileStore {
    root: PathBuf,
}

impl LocalMediaFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins a relative path under the root, refusing anything that could
    /// escape it.
    fn resolve(&self, relative_path: &str) -> ApplicationResult<PathBuf> {
        let relative = Path::new(relative_path);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(ApplicationError::validation(format!(
                "invalid media path '{relative_path}'"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl MediaFileStore for LocalMediaFileStore {
    async fn save(&self, name: &StoredName, bytes: &[u8]) -> ApplicationResult<String> {
        let dir = self.root.join(name.kind().dir_name());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ApplicationError::infrastructure(format!("{}: {e}", dir.display())))?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let file_name = if attempt == 0 {
                name.file_name()
            } else {
                name.numbered(attempt)
            };
            let path = dir.join(&file_name);
            // `create_new` claims the name atomically, so concurrent uploads
            // of the same file never overwrite each other.
            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(ApplicationError::infrastructure(format!(
                        "{}: {e}",
                        path.display()
                    )));
                }
            };
            file.write_all(bytes)
                .await
                .map_err(|e| ApplicationError::infrastructure(format!("{}: {e}", path.display())))?;
            file.flush()
                .await
                .map_err(|e| ApplicationError::infrastructure(format!("{}: {e}", path.display())))?;
            debug!(path = %path.display(), bytes = bytes.len(), "media stored");
            return Ok(file_name);
        }
        Err(ApplicationError::conflict(format!(
            "no free file name for '{}'",
            name.file_name()
        )))
    }

    async fn remove(&self, relative_path: &str) -> ApplicationResult<()> {
        let path = self.resolve(relative_path)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::infrastructure(format!(
                "{}: {e}",
                path.display()
            ))),
        }
    }

    async fn exists(&self, relative_path: &str) -> bool {
        match self.resolve(relative_path) {
            Ok(path) => tokio::fs::try_exists(path).await.unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn colliding_names_get_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalMediaFileStore::new(dir.path());
        let name = StoredName::from_upload("Stage Photo.jpg", 3).unwrap();

        assert_eq!(store.save(&name, b"one").await.unwrap(), "stage-photo.jpg");
        assert_eq!(store.save(&name, b"two").await.unwrap(), "stage-photo(1).jpg");
        assert!(store.exists("photos/stage-photo(1).jpg").await);

        store.remove("photos/stage-photo.jpg").await.unwrap();
        store.remove("photos/stage-photo.jpg").await.unwrap();
        assert!(!store.exists("photos/stage-photo.jpg").await);
    }

    #[tokio::test]
    async fn paths_cannot_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalMediaFileStore::new(dir.path());
        assert!(store.remove("../secrets.json").await.is_err());
        assert!(!store.exists("/etc/passwd").await);
    }
}
