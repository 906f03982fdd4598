// src/domain/booking/history.rs
use crate::domain::schedule::{BookingKey, ScheduleBook, slot_time};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    Booked,
    Cancelled,
    Expired,
}

/// Per-user view of booking activity, kept next to the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingHistoryRecord {
    pub user_email: String,
    pub room: String,
    pub day: String,
    pub slot: String,
    pub action: HistoryAction,
    #[serde(with = "crate::domain::timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl BookingHistoryRecord {
    pub fn new(
        user_email: impl Into<String>,
        key: &BookingKey,
        action: HistoryAction,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            user_email: user_email.into(),
            room: key.room.clone(),
            day: key.day.clone(),
            slot: key.slot.clone(),
            action,
            timestamp,
        }
    }

    pub fn is_for(&self, key: &BookingKey) -> bool {
        self.room == key.room && self.day == key.day && self.slot == key.slot
    }
}

/// Read-side helpers over the full history, given in append order.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    records: Vec<BookingHistoryRecord>,
}

impl HistoryLedger {
    pub fn new(records: Vec<BookingHistoryRecord>) -> Self {
        Self { records }
    }

    /// The user's records, newest first.
    pub fn for_user(&self, email: &str, limit: usize) -> Vec<BookingHistoryRecord> {
        let mut mine: Vec<_> = self
            .records
            .iter()
            .rev()
            .filter(|r| r.user_email.eq_ignore_ascii_case(email))
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        mine.truncate(limit);
        mine
    }

    /// Who holds the slot according to its latest BOOKED record.
    pub fn last_booker(&self, key: &BookingKey) -> Option<&str> {
        self.records
            .iter()
            .rev()
            .find(|r| r.action == HistoryAction::Booked && r.is_for(key))
            .map(|r| r.user_email.as_str())
    }

    /// Slots of `room` on `day` that `email` booked last and that are still
    /// occupied, ordered by start time.
    pub fn active_bookings(
        &self,
        email: &str,
        room: &str,
        day: &str,
        schedule: &ScheduleBook,
    ) -> Vec<String> {
        let mut slots: Vec<String> = schedule
            .slot_labels(room, day)
            .into_iter()
            .filter(|slot| schedule.is_occupied(room, day, slot) == Some(true))
            .filter(|slot| {
                let key = BookingKey {
                    room: room.to_string(),
                    day: day.to_string(),
                    slot: slot.clone(),
                };
                self.last_booker(&key)
                    .is_some_and(|booker| booker.eq_ignore_ascii_case(email))
            })
            .collect();
        slots.sort_by_key(|s| slot_time::sort_key(s));
        slots
    }
}
