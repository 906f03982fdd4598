// src/application/dto/audit.rs
use crate::domain::audit::AuditEvent;
use crate::domain::booking::{BookingHistoryRecord, HistoryAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditEventDto {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub details: serde_json::Value,
}

impl From<AuditEvent> for AuditEventDto {
    fn from(e: AuditEvent) -> Self {
        Self {
            id: e.id,
            timestamp: e.timestamp,
            actor: e.actor,
            action: e.action.to_string(),
            entity_type: e.entity_type.to_string(),
            entity_id: e.entity_id,
            details: e.details,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingHistoryDto {
    pub room: String,
    pub day: String,
    pub slot: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl From<BookingHistoryRecord> for BookingHistoryDto {
    fn from(r: BookingHistoryRecord) -> Self {
        let action = match r.action {
            HistoryAction::Booked => "BOOKED",
            HistoryAction::Cancelled => "CANCELLED",
            HistoryAction::Expired => "EXPIRED",
        };
        Self {
            room: r.room,
            day: r.day,
            slot: r.slot,
            action: action.to_string(),
            timestamp: r.timestamp,
        }
    }
}
