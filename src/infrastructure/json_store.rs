// src/infrastructure/json_store.rs
//! Whole-document JSON persistence.
//!
//! Every collection lives in its own file under the data directory and is
//! read and written wholesale. Writes go to a sibling temp file that is then
//! renamed over the target, so a reader sees either the old or the new
//! document. Mutations of one path are serialized through a per-path async
//! lock; `update` is the read-modify-write transaction built on it.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::debug;
use uuid::Uuid;

pub struct JsonStore {
    root: PathBuf,
    locks: Mutex<HashMap<PathBuf, Arc<tokio::sync::Mutex<()>>>>,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Reads `name`. A missing file is the empty document; a file that does
    /// not parse is a persistence error naming the path.
    pub async fn read<T>(&self, name: &str) -> DomainResult<T>
    where
        T: DeserializeOwned + Default,
    {
        read_document(&self.path(name)).await
    }

    pub async fn write<T>(&self, name: &str, value: &T) -> DomainResult<()>
    where
        T: Serialize + Sync,
    {
        let path = self.path(name);
        let lock = self.lock_for(&path);
        let _guard = lock.lock().await;
        write_document(&path, value).await
    }

    pub async fn append<T>(&self, name: &str, item: T) -> DomainResult<()>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        self.update(name, move |items: &mut Vec<T>| {
            items.push(item);
            Ok(())
        })
        .await
    }

    /// Read-modify-write of one document under its lock. When `apply` fails
    /// nothing is written and the error is returned unchanged.
    pub async fn update<T, R, F>(&self, name: &str, apply: F) -> DomainResult<R>
    where
        T: Serialize + DeserializeOwned + Default + Send + Sync,
        R: Send,
        F: FnOnce(&mut T) -> DomainResult<R> + Send,
    {
        let path = self.path(name);
        let lock = self.lock_for(&path);
        let _guard = lock.lock().await;

        let mut document: T = read_document(&path).await?;
        let out = apply(&mut document)?;
        write_document(&path, &document).await?;
        Ok(out)
    }

    /// Creates `name` (relative to the data directory) and its parents.
    /// An empty name means the data directory itself.
    pub async fn ensure_dir(&self, name: &str) -> DomainResult<PathBuf> {
        let dir = self.path(name);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| DomainError::persistence(dir.display(), e))?;
        Ok(dir)
    }

    /// Entry names under `name`, sorted. A missing directory lists as empty.
    pub async fn list_dir(&self, name: &str) -> DomainResult<Vec<String>> {
        let dir = self.path(name);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DomainError::persistence(dir.display(), e)),
        };
        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::persistence(dir.display(), e))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with('.') {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn lock_for(&self, path: &Path) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|p| p.into_inner());
        locks.entry(path.to_path_buf()).or_default().clone()
    }
}

async fn read_document<T>(path: &Path) -> DomainResult<T>
where
    T: DeserializeOwned + Default,
{
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "document missing, using empty value");
            return Ok(T::default());
        }
        Err(e) => return Err(DomainError::persistence(path.display(), e)),
    };
    serde_json::from_slice(&bytes).map_err(|e| {
        DomainError::Persistence(format!("malformed document {}: {e}", path.display()))
    })
}

async fn write_document<T>(path: &Path, value: &T) -> DomainResult<()>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DomainError::persistence(parent.display(), e))?;
    }
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| DomainError::persistence(path.display(), e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4().simple()));
    tokio::fs::write(&tmp, &bytes)
        .await
        .map_err(|e| DomainError::persistence(tmp.display(), e))?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(DomainError::persistence(path.display(), e));
    }
    debug!(path = %path.display(), bytes = bytes.len(), "document written");
    Ok(())
}
