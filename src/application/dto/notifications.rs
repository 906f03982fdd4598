// src/application/dto/notifications.rs
use crate::domain::notification::InAppNotification;
use crate::domain::settings::UserPreferences;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl From<InAppNotification> for NotificationDto {
    fn from(n: InAppNotification) -> Self {
        Self {
            id: n.id,
            kind: n.kind.as_str().to_string(),
            title: n.title,
            message: n.message,
            timestamp: n.timestamp,
            read: n.read,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationListDto {
    pub items: Vec<NotificationDto>,
    pub unread: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreferencesDto {
    pub email_booking_confirmations: bool,
    pub email_reminders: bool,
    pub email_cancellations: bool,
    pub push_notifications: bool,
    #[serde(default)]
    pub reminder_times: Vec<String>,
}

impl From<UserPreferences> for PreferencesDto {
    fn from(p: UserPreferences) -> Self {
        Self {
            email_booking_confirmations: p.email_booking_confirmations,
            email_reminders: p.email_reminders,
            email_cancellations: p.email_cancellations,
            push_notifications: p.push_notifications,
            reminder_times: p.reminder_times,
        }
    }
}

impl From<PreferencesDto> for UserPreferences {
    fn from(p: PreferencesDto) -> Self {
        Self {
            email_booking_confirmations: p.email_booking_confirmations,
            email_reminders: p.email_reminders,
            email_cancellations: p.email_cancellations,
            push_notifications: p.push_notifications,
            reminder_times: p.reminder_times,
        }
    }
}
