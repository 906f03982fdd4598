// src/domain/schedule/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::schedule::{entity::ScheduleBook, value_objects::BookingKey};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

/// Persistent `ScheduleBook`. Every mutation is one atomic transaction on
/// the backing document.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn load(&self) -> DomainResult<ScheduleBook>;

    /// Flips the slot from `expected` to `occupied` under the store lock.
    /// Fails with `StaleState` when the slot no longer holds `expected`.
    async fn compare_and_set(
        &self,
        key: &BookingKey,
        expected: bool,
        occupied: bool,
    ) -> DomainResult<()>;

    async fn release_elapsed(
        &self,
        day: &str,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> DomainResult<Vec<BookingKey>>;
}
