// src/domain/audit/entity.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Actor recorded for events raised by the portal itself.
pub const SYSTEM_ACTOR: &str = "SYSTEM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Book,
    Cancel,
    AutoExpire,
    Upload,
    Delete,
    Create,
    Approve,
    Reject,
    Search,
    Share,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Book => "BOOK",
            Self::Cancel => "CANCEL",
            Self::AutoExpire => "AUTO_EXPIRE",
            Self::Upload => "UPLOAD",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Approve => "APPROVE",
            Self::Reject => "REJECT",
            Self::Search => "SEARCH",
            Self::Share => "SHARE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        const ALL: [AuditAction; 10] = [
            AuditAction::Book,
            AuditAction::Cancel,
            AuditAction::AutoExpire,
            AuditAction::Upload,
            AuditAction::Delete,
            AuditAction::Create,
            AuditAction::Approve,
            AuditAction::Reject,
            AuditAction::Search,
            AuditAction::Share,
        ];
        ALL.into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEntityType {
    RoomBooking,
    Media,
    Album,
    FreeRooms,
    Waitlist,
    ShareLink,
}

impl AuditEntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoomBooking => "ROOM_BOOKING",
            Self::Media => "MEDIA",
            Self::Album => "ALBUM",
            Self::FreeRooms => "FREE_ROOMS",
            Self::Waitlist => "WAITLIST",
            Self::ShareLink => "SHARE_LINK",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [
            Self::RoomBooking,
            Self::Media,
            Self::Album,
            Self::FreeRooms,
            Self::Waitlist,
            Self::ShareLink,
        ]
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for AuditEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable ledger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    #[serde(with = "crate::domain::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: AuditAction,
    pub entity_type: AuditEntityType,
    pub entity_id: String,
    #[serde(default)]
    pub details: serde_json::Value,
}

impl AuditEvent {
    pub fn new(
        timestamp: DateTime<Utc>,
        actor: impl Into<String>,
        action: AuditAction,
        entity_type: AuditEntityType,
        entity_id: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            actor: actor.into(),
            action,
            entity_type,
            entity_id: entity_id.into(),
            details,
        }
    }
}

/// Selection over the ledger. Every set field must match; results come
/// back newest first.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub entity_type: Option<AuditEntityType>,
    pub entity_id: Option<String>,
    /// Exact actor.
    pub actor: Option<String>,
    /// Case-insensitive substring of the actor.
    pub actor_contains: Option<String>,
    pub action: Option<AuditAction>,
    pub limit: Option<usize>,
}

impl AuditFilter {
    pub fn for_entity(entity_type: AuditEntityType, entity_id: impl Into<String>) -> Self {
        Self {
            entity_type: Some(entity_type),
            entity_id: Some(entity_id.into()),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, event: &AuditEvent) -> bool {
        if self.entity_type.is_some_and(|t| t != event.entity_type) {
            return false;
        }
        if self
            .entity_id
            .as_deref()
            .is_some_and(|id| id != event.entity_id)
        {
            return false;
        }
        if self.actor.as_deref().is_some_and(|a| a != event.actor) {
            return false;
        }
        if let Some(needle) = self.actor_contains.as_deref() {
            if !event
                .actor
                .to_lowercase()
                .contains(&needle.trim().to_lowercase())
            {
                return false;
            }
        }
        self.action.is_none_or(|a| a == event.action)
    }

    /// Filters `events` (given in append order) and orders them newest
    /// first. Events sharing a timestamp keep reverse append order.
    pub fn apply(&self, events: Vec<AuditEvent>) -> Vec<AuditEvent> {
        let mut selected: Vec<AuditEvent> =
            events.into_iter().rev().filter(|e| self.matches(e)).collect();
        selected.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn event(minutes: i64, actor: &str, action: AuditAction, entity_id: &str) -> AuditEvent {
        let base = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
        AuditEvent::new(
            base + Duration::minutes(minutes),
            actor,
            action,
            AuditEntityType::RoomBooking,
            entity_id,
            json!({}),
        )
    }

    #[test]
    fn serializes_screaming_snake_case() {
        let e = event(0, SYSTEM_ACTOR, AuditAction::AutoExpire, "Room1|Monday|9AM-10AM");
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["action"], "AUTO_EXPIRE");
        assert_eq!(v["entity_type"], "ROOM_BOOKING");
    }

    #[test]
    fn apply_sorts_newest_first_and_limits() {
        let events = vec![
            event(0, "a@uni.edu", AuditAction::Book, "x"),
            event(10, "b@uni.edu", AuditAction::Cancel, "x"),
            event(5, "a@uni.edu", AuditAction::Book, "y"),
        ];
        let out = AuditFilter::default().with_limit(2).apply(events);
        let minutes: Vec<_> = out.iter().map(|e| e.timestamp.format("%M").to_string()).collect();
        assert_eq!(minutes, vec!["10", "05"]);
    }

    #[test]
    fn actor_contains_is_case_insensitive() {
        let filter = AuditFilter {
            actor_contains: Some("ALICE".into()),
            action: Some(AuditAction::Book),
            ..AuditFilter::default()
        };
        assert!(filter.matches(&event(0, "alice.smith@uni.edu", AuditAction::Book, "x")));
        assert!(!filter.matches(&event(0, "alice.smith@uni.edu", AuditAction::Cancel, "x")));
        assert!(!filter.matches(&event(0, "bob@uni.edu", AuditAction::Book, "x")));
    }

    #[test]
    fn parses_actions_loosely() {
        assert_eq!(AuditAction::parse("auto_expire"), Some(AuditAction::AutoExpire));
        assert_eq!(AuditAction::parse("nope"), None);
    }
}
