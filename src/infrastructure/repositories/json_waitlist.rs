// src/infrastructure/repositories/json_waitlist.rs
use super::WAITLIST_FILE;
use crate::domain::errors::DomainResult;
use crate::domain::schedule::BookingKey;
use crate::domain::waitlist::{Waitlist, WaitlistEntry, WaitlistId, WaitlistRepository};
use crate::infrastructure::json_store::JsonStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct JsonWaitlistRepository {
    store: Arc<JsonStore>,
}

impl JsonWaitlistRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WaitlistRepository for JsonWaitlistRepository {
    async fn join(&self, entry: WaitlistEntry) -> DomainResult<()> {
        self.store.append(WAITLIST_FILE, entry).await
    }

    async fn promote(
        &self,
        key: &BookingKey,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<WaitlistEntry>> {
        self.store
            .update(WAITLIST_FILE, |list: &mut Waitlist| Ok(list.promote_next(key, now)))
            .await
    }

    async fn remove(&self, id: &WaitlistId, email: &str) -> DomainResult<WaitlistEntry> {
        self.store
            .update(WAITLIST_FILE, |list: &mut Waitlist| list.remove_for(id, email))
            .await
    }

    async fn list(&self) -> DomainResult<Vec<WaitlistEntry>> {
        let list: Waitlist = self.store.read(WAITLIST_FILE).await?;
        Ok(list.into_entries())
    }
}
