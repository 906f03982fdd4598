// src/domain/booking/repository.rs
use crate::domain::booking::history::BookingHistoryRecord;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait BookingHistoryRepository: Send + Sync {
    async fn append(&self, record: BookingHistoryRecord) -> DomainResult<()>;

    async fn append_all(&self, records: Vec<BookingHistoryRecord>) -> DomainResult<()>;

    /// Every record in append order.
    async fn list(&self) -> DomainResult<Vec<BookingHistoryRecord>>;
}
