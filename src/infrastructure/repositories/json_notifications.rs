// src/infrastructure/repositories/json_notifications.rs
use super::NOTIFICATIONS_FILE;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::notification::{InAppNotification, InAppNotificationRepository};
use crate::infrastructure::json_store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct JsonNotificationRepository {
    store: Arc<JsonStore>,
}

impl JsonNotificationRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InAppNotificationRepository for JsonNotificationRepository {
    async fn append(&self, notification: InAppNotification) -> DomainResult<()> {
        self.store.append(NOTIFICATIONS_FILE, notification).await
    }

    async fn list(&self) -> DomainResult<Vec<InAppNotification>> {
        self.store.read(NOTIFICATIONS_FILE).await
    }

    async fn mark_read(&self, id: Uuid, recipient: &str) -> DomainResult<()> {
        self.store
            .update(NOTIFICATIONS_FILE, |all: &mut Vec<InAppNotification>| {
                let n = all
                    .iter_mut()
                    .find(|n| n.id == id && n.is_for(recipient))
                    .ok_or_else(|| DomainError::NotFound(format!("notification {id}")))?;
                n.read = true;
                Ok(())
            })
            .await
    }

    async fn clear(&self, recipient: &str) -> DomainResult<usize> {
        self.store
            .update(NOTIFICATIONS_FILE, |all: &mut Vec<InAppNotification>| {
                let before = all.len();
                all.retain(|n| !n.is_for(recipient));
                Ok(before - all.len())
            })
            .await
    }
}
