// src/domain/notification/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::notification::entity::InAppNotification;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait InAppNotificationRepository: Send + Sync {
    async fn append(&self, notification: InAppNotification) -> DomainResult<()>;

    async fn list(&self) -> DomainResult<Vec<InAppNotification>>;

    /// `NotFound` unless `id` exists and is addressed to `recipient`.
    async fn mark_read(&self, id: Uuid, recipient: &str) -> DomainResult<()>;

    /// Removes every notification addressed to `recipient`, returning how
    /// many were dropped.
    async fn clear(&self, recipient: &str) -> DomainResult<usize>;
}
