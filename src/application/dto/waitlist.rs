// src/application/dto/waitlist.rs
use crate::domain::waitlist::{WaitlistEntry, WaitlistStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WaitlistEntryDto {
    pub id: String,
    pub room: String,
    pub day: String,
    pub slot: String,
    pub user_email: String,
    pub status: String,
    pub joined_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notified_at: Option<DateTime<Utc>>,
}

impl From<WaitlistEntry> for WaitlistEntryDto {
    fn from(e: WaitlistEntry) -> Self {
        Self {
            id: e.id.into(),
            room: e.room,
            day: e.day,
            slot: e.slot,
            user_email: e.user_email,
            status: match e.status {
                WaitlistStatus::Waiting => "waiting",
                WaitlistStatus::Notified => "notified",
            }
            .to_string(),
            joined_at: e.timestamp,
            notified_at: e.notified_at,
        }
    }
}
