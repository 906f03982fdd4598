// src/infrastructure/repositories/json_booking_history.rs
use super::BOOKING_HISTORY_FILE;
use crate::domain::booking::{BookingHistoryRecord, BookingHistoryRepository};
use crate::domain::errors::DomainResult;
use crate::infrastructure::json_store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct JsonBookingHistoryRepository {
    store: Arc<JsonStore>,
}

impl JsonBookingHistoryRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookingHistoryRepository for JsonBookingHistoryRepository {
    async fn append(&self, record: BookingHistoryRecord) -> DomainResult<()> {
        self.store.append(BOOKING_HISTORY_FILE, record).await
    }

    async fn append_all(&self, records: Vec<BookingHistoryRecord>) -> DomainResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        self.store
            .update(BOOKING_HISTORY_FILE, move |all: &mut Vec<BookingHistoryRecord>| {
                all.extend(records);
                Ok(())
            })
            .await
    }

    async fn list(&self) -> DomainResult<Vec<BookingHistoryRecord>> {
        self.store.read(BOOKING_HISTORY_FILE).await
    }
}
