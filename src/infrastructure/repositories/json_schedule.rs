// src/infrastructure/repositories/json_schedule.rs
use super::{FACULTY_FILE, ROOMS_FILE};
use crate::domain::errors::DomainResult;
use crate::domain::schedule::{BookingKey, ScheduleBook, ScheduleRepository};
use crate::infrastructure::json_store::JsonStore;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

/// `ScheduleBook` persisted as one document (`rooms.json` or `faculty.json`).
pub struct JsonScheduleRepository {
    store: Arc<JsonStore>,
    file: &'static str,
}

impl JsonScheduleRepository {
    pub fn rooms(store: Arc<JsonStore>) -> Self {
        Self {
            store,
            file: ROOMS_FILE,
        }
    }

    pub fn faculty(store: Arc<JsonStore>) -> Self {
        Self {
            store,
            file: FACULTY_FILE,
        }
    }
}

#[async_trait]
impl ScheduleRepository for JsonScheduleRepository {
    async fn load(&self) -> DomainResult<ScheduleBook> {
        self.store.read(self.file).await
    }

    async fn compare_and_set(
        &self,
        key: &BookingKey,
        expected: bool,
        occupied: bool,
    ) -> DomainResult<()> {
        self.store
            .update(self.file, |book: &mut ScheduleBook| {
                book.compare_and_set(key, expected, occupied)
            })
            .await
    }

    async fn release_elapsed(
        &self,
        day: &str,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> DomainResult<Vec<BookingKey>> {
        // Skip the rewrite when nothing has elapsed; the sweep runs on every view.
        let mut snapshot = self.load().await?;
        if snapshot.release_elapsed(day, date, now).is_empty() {
            return Ok(Vec::new());
        }
        self.store
            .update(self.file, |book: &mut ScheduleBook| {
                Ok(book.release_elapsed(day, date, now))
            })
            .await
    }
}
