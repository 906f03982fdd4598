// src/domain/waitlist/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::BookingKey;
use crate::domain::user::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque entry id. New entries get a UUID; older files carry ids such as
/// `waitlist_1741000000.123`, which are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaitlistId(String);

impl WaitlistId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WaitlistId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<WaitlistId> for String {
    fn from(value: WaitlistId) -> Self {
        value.0
    }
}

impl fmt::Display for WaitlistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitlistStatus {
    Waiting,
    Notified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: WaitlistId,
    pub room: String,
    pub day: String,
    pub slot: String,
    pub user_email: String,
    pub user_role: Role,
    #[serde(with = "crate::domain::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub status: WaitlistStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::timestamp::option"
    )]
    pub notified_at: Option<DateTime<Utc>>,
}

impl WaitlistEntry {
    pub fn new(
        key: &BookingKey,
        user_email: impl Into<String>,
        user_role: Role,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: WaitlistId::generate(),
            room: key.room.clone(),
            day: key.day.clone(),
            slot: key.slot.clone(),
            user_email: user_email.into(),
            user_role,
            timestamp,
            status: WaitlistStatus::Waiting,
            notified_at: None,
        }
    }

    pub fn key(&self) -> BookingKey {
        BookingKey {
            room: self.room.clone(),
            day: self.day.clone(),
            slot: self.slot.clone(),
        }
    }

    pub fn is_waiting_for(&self, key: &BookingKey) -> bool {
        self.status == WaitlistStatus::Waiting
            && self.room == key.room
            && self.day == key.day
            && self.slot == key.slot
    }
}

/// The persisted queue, in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Waitlist {
    entries: Vec<WaitlistEntry>,
}

impl Waitlist {
    pub fn new(entries: Vec<WaitlistEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[WaitlistEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<WaitlistEntry> {
        self.entries
    }

    pub fn push(&mut self, entry: WaitlistEntry) {
        self.entries.push(entry);
    }

    /// Marks the earliest waiting entry for `key` as notified. Ties on
    /// timestamp go to the entry appended first. A promoted entry stays in
    /// the list and is never picked again.
    pub fn promote_next(&mut self, key: &BookingKey, now: DateTime<Utc>) -> Option<WaitlistEntry> {
        let (index, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_waiting_for(key))
            .min_by_key(|(i, e)| (e.timestamp, *i))?;
        let entry = &mut self.entries[index];
        entry.status = WaitlistStatus::Notified;
        entry.notified_at = Some(now);
        Some(entry.clone())
    }

    pub fn remove_for(&mut self, id: &WaitlistId, email: &str) -> DomainResult<WaitlistEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| &e.id == id && e.user_email.eq_ignore_ascii_case(email))
            .ok_or_else(|| DomainError::NotFound(format!("waitlist entry {id}")))?;
        Ok(self.entries.remove(index))
    }

    pub fn waiting_for(&self, email: &str) -> Vec<WaitlistEntry> {
        self.entries
            .iter()
            .filter(|e| {
                e.status == WaitlistStatus::Waiting && e.user_email.eq_ignore_ascii_case(email)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn key() -> BookingKey {
        BookingKey::new("Room1", "Monday", "9AM-10AM").unwrap()
    }

    fn t(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[test]
    fn promotes_in_join_order_and_never_twice() {
        let mut list = Waitlist::default();
        list.push(WaitlistEntry::new(&key(), "late@uni.edu", Role::Student, t(5)));
        list.push(WaitlistEntry::new(&key(), "early@uni.edu", Role::Student, t(1)));

        let first = list.promote_next(&key(), t(10)).unwrap();
        assert_eq!(first.user_email, "early@uni.edu");
        assert_eq!(first.notified_at, Some(t(10)));

        let second = list.promote_next(&key(), t(20)).unwrap();
        assert_eq!(second.user_email, "late@uni.edu");

        assert!(list.promote_next(&key(), t(30)).is_none());
    }

    #[test]
    fn equal_timestamps_fall_back_to_append_order() {
        let mut list = Waitlist::default();
        list.push(WaitlistEntry::new(&key(), "first@uni.edu", Role::Teacher, t(0)));
        list.push(WaitlistEntry::new(&key(), "second@uni.edu", Role::Teacher, t(0)));
        assert_eq!(list.promote_next(&key(), t(1)).unwrap().user_email, "first@uni.edu");
    }

    #[test]
    fn users_can_only_remove_their_own_entry() {
        let mut list = Waitlist::default();
        let entry = WaitlistEntry::new(&key(), "a@uni.edu", Role::Student, t(0));
        let id = entry.id.clone();
        list.push(entry);

        assert!(matches!(list.remove_for(&id, "b@uni.edu"), Err(DomainError::NotFound(_))));
        assert_eq!(list.waiting_for("a@uni.edu").len(), 1);
        list.remove_for(&id, "a@uni.edu").unwrap();
        assert!(list.entries().is_empty());
    }

    #[test]
    fn reads_entries_written_with_naive_timestamps_and_legacy_ids() {
        let raw = r#"[{
            "id": "waitlist_1741000000.123",
            "room": "Room1", "day": "Monday", "slot": "9AM-10AM",
            "user_email": "a@uni.edu", "user_role": "teacher",
            "timestamp": "2025-03-03T08:05:00.250000",
            "status": "waiting"
        }]"#;
        let mut list: Waitlist = serde_json::from_str(raw).unwrap();
        let id = WaitlistId::from("waitlist_1741000000.123".to_string());
        assert_eq!(list.entries()[0].id, id);
        assert_eq!(list.entries()[0].timestamp.timestamp(), t(5).timestamp());
        assert_eq!(list.remove_for(&id, "A@uni.edu").unwrap().room, "Room1");
    }
}
