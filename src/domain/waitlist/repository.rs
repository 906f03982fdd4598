// src/domain/waitlist/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::schedule::BookingKey;
use crate::domain::waitlist::entity::{WaitlistEntry, WaitlistId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait WaitlistRepository: Send + Sync {
    async fn join(&self, entry: WaitlistEntry) -> DomainResult<()>;

    /// Marks the earliest waiting entry for `key` as notified, atomically.
    async fn promote(
        &self,
        key: &BookingKey,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<WaitlistEntry>>;

    /// Removes `id` only when it belongs to `email`.
    async fn remove(&self, id: &WaitlistId, email: &str) -> DomainResult<WaitlistEntry>;

    async fn list(&self) -> DomainResult<Vec<WaitlistEntry>>;
}
