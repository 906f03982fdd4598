// src/domain/settings/entity.rs
//! Typed view of `settings.json`. Every section falls back to its
//! defaults when absent; keys this crate does not know about are carried
//! through `extra` so saving never drops them.

use crate::domain::notification::NotificationKind;
use crate::domain::schedule::SaturdayPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_SHARE_SECRET: &str = "default-secret";
const DEFAULT_SHARE_EXPIRY_HOURS: u32 = 48;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub notifications: NotificationSettings,
    pub thumbnails: ThumbnailSettings,
    pub media_approval: MediaApprovalSettings,
    pub saturday: SaturdaySettings,
    pub share_links: ShareLinkSettings,
    pub user_preferences: BTreeMap<String, UserPreferences>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Settings {
    pub fn saturday_policy(&self) -> SaturdayPolicy {
        SaturdayPolicy {
            saturdays_enabled: self.saturday.enabled,
            exclude_third_saturday: self.saturday.exclude_third_saturday,
        }
    }

    pub fn preferences_for(&self, email: &str) -> UserPreferences {
        self.user_preferences
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(email))
            .map(|(_, p)| p.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: EmailSettings,
    pub telegram: TelegramSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub enabled: bool,
    pub from_email: String,
    /// HTTP endpoint accepting `{from, to, subject, body}`.
    pub relay_url: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramSettings {
    pub enabled: bool,
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailSettings {
    pub enabled: bool,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_width: 200,
            max_height: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaApprovalSettings {
    pub enabled: bool,
}

impl Default for MediaApprovalSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaturdaySettings {
    pub enabled: bool,
    pub exclude_third_saturday: bool,
}

impl Default for SaturdaySettings {
    fn default() -> Self {
        let policy = SaturdayPolicy::default();
        Self {
            enabled: policy.saturdays_enabled,
            exclude_third_saturday: policy.exclude_third_saturday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareLinkSettings {
    pub secret_key: String,
    pub default_expiry_hours: u32,
}

impl Default for ShareLinkSettings {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SHARE_SECRET.to_string(),
            default_expiry_hours: DEFAULT_SHARE_EXPIRY_HOURS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub email_booking_confirmations: bool,
    pub email_reminders: bool,
    pub email_cancellations: bool,
    pub push_notifications: bool,
    pub reminder_times: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            email_booking_confirmations: true,
            email_reminders: true,
            email_cancellations: true,
            push_notifications: true,
            reminder_times: vec!["1 hour before".into(), "30 minutes before".into()],
        }
    }
}

impl UserPreferences {
    /// Whether the user accepts email for this kind of notification.
    /// Waitlist promotions are always sent.
    pub fn wants_email(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::BookingConfirmation => self.email_booking_confirmations,
            NotificationKind::BookingCancellation => self.email_cancellations,
            NotificationKind::BookingReminder => self.email_reminders,
            NotificationKind::WaitlistPromotion => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_sections_take_defaults() {
        let settings: Settings = serde_json::from_value(json!({
            "notifications": { "email": { "enabled": true } }
        }))
        .unwrap();
        assert!(settings.notifications.email.enabled);
        assert!(!settings.notifications.telegram.enabled);
        assert!(settings.media_approval.enabled);
        assert_eq!(settings.share_links.default_expiry_hours, 48);
        assert_eq!(settings.saturday_policy(), SaturdayPolicy::default());
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let settings: Settings = serde_json::from_value(json!({
            "theme": { "accent": "teal" }
        }))
        .unwrap();
        let saved = serde_json::to_value(&settings).unwrap();
        assert_eq!(saved["theme"]["accent"], "teal");
    }

    #[test]
    fn preferences_gate_email_per_kind() {
        let prefs = UserPreferences {
            email_cancellations: false,
            ..UserPreferences::default()
        };
        assert!(!prefs.wants_email(NotificationKind::BookingCancellation));
        assert!(prefs.wants_email(NotificationKind::BookingConfirmation));
        assert!(prefs.wants_email(NotificationKind::WaitlistPromotion));
    }
}
