// src/infrastructure/notifications/channels.rs
use crate::{
    application::ports::time::Clock,
    domain::{
        notification::{InAppNotification, InAppNotificationRepository, Notification},
        settings::Settings,
    },
};
use async_trait::async_trait;
use serde_json::json;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

const TELEGRAM_API: &str = "https://api.telegram.org";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("remote rejected delivery with status {status}")]
    Rejected { status: u16 },

    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for ChannelError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// One delivery route. `enabled` is asked per notification with the
/// settings current at dispatch time.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn name(&self) -> &'static str;

    fn enabled(&self, settings: &Settings, notification: &Notification) -> bool;

    async fn deliver(
        &self,
        settings: &Settings,
        notification: &Notification,
    ) -> Result<(), ChannelError>;
}

/// Appends to the in-app notification centre. Always on.
pub struct InAppChannel {
    repo: Arc<dyn InAppNotificationRepository>,
    clock: Arc<dyn Clock>,
}

impl InAppChannel {
    pub fn new(repo: Arc<dyn InAppNotificationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl NotificationChannel for InAppChannel {
    fn name(&self) -> &'static str {
        "in_app"
    }

    fn enabled(&self, _settings: &Settings, _notification: &Notification) -> bool {
        true
    }

    async fn deliver(
        &self,
        _settings: &Settings,
        notification: &Notification,
    ) -> Result<(), ChannelError> {
        let record = InAppNotification::from_notification(notification, self.clock.now());
        self.repo
            .append(record)
            .await
            .map_err(|e| ChannelError::Storage(e.to_string()))
    }
}

/// Bot API `sendMessage` to the configured chat.
pub struct TelegramChannel {
    client: reqwest::Client,
    api_base: String,
}

impl TelegramChannel {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_api_base(client, TELEGRAM_API)
    }

    pub fn with_api_base(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn enabled(&self, settings: &Settings, _notification: &Notification) -> bool {
        let telegram = &settings.notifications.telegram;
        telegram.enabled && !telegram.bot_token.is_empty() && !telegram.chat_id.is_empty()
    }

    async fn deliver(
        &self,
        settings: &Settings,
        notification: &Notification,
    ) -> Result<(), ChannelError> {
        let telegram = &settings.notifications.telegram;
        let url = format!("{}/bot{}/sendMessage", self.api_base, telegram.bot_token);
        let text = format!("{}\n\n{}", notification.subject(), notification.body());
        let response = self
            .client
            .post(url)
            .timeout(HTTP_TIMEOUT)
            .json(&json!({ "chat_id": telegram.chat_id, "text": text }))
            .send()
            .await?;
        check_status(response.status())
    }
}

/// Posts `{from, to, subject, body}` to an HTTP mail relay.
pub struct EmailChannel {
    client: reqwest::Client,
}

impl EmailChannel {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationChannel for EmailChannel {
    fn name(&self) -> &'static str {
        "email"
    }

    fn enabled(&self, settings: &Settings, notification: &Notification) -> bool {
        let email = &settings.notifications.email;
        email.enabled
            && !email.relay_url.is_empty()
            && settings
                .preferences_for(&notification.recipient)
                .wants_email(notification.kind)
    }

    async fn deliver(
        &self,
        settings: &Settings,
        notification: &Notification,
    ) -> Result<(), ChannelError> {
        let email = &settings.notifications.email;
        let mut request = self
            .client
            .post(&email.relay_url)
            .timeout(HTTP_TIMEOUT)
            .json(&json!({
                "from": email.from_email,
                "to": notification.recipient,
                "subject": notification.subject(),
                "body": notification.body(),
            }));
        if !email.username.is_empty() {
            request = request.basic_auth(&email.username, Some(&email.password));
        }
        check_status(request.send().await?.status())
    }
}

fn check_status(status: reqwest::StatusCode) -> Result<(), ChannelError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ChannelError::Rejected {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{notification::NotificationKind, settings::UserPreferences};

    fn cancellation() -> Notification {
        Notification {
            kind: NotificationKind::BookingCancellation,
            recipient: "a@uni.edu".into(),
            room: "Room1".into(),
            date: "Monday".into(),
            slot: "9AM-10AM".into(),
            reason: None,
        }
    }

    #[test]
    fn email_respects_switch_relay_and_preferences() {
        let channel = EmailChannel::new(reqwest::Client::new());
        let mut settings = Settings::default();
        assert!(!channel.enabled(&settings, &cancellation()));

        settings.notifications.email.enabled = true;
        settings.notifications.email.relay_url = "http://relay.local/send".into();
        assert!(channel.enabled(&settings, &cancellation()));

        settings.user_preferences.insert(
            "A@uni.edu".into(),
            UserPreferences {
                email_cancellations: false,
                ..UserPreferences::default()
            },
        );
        assert!(!channel.enabled(&settings, &cancellation()));
    }

    #[test]
    fn telegram_needs_credentials() {
        let channel = TelegramChannel::new(reqwest::Client::new());
        let mut settings = Settings::default();
        settings.notifications.telegram.enabled = true;
        assert!(!channel.enabled(&settings, &cancellation()));
        settings.notifications.telegram.bot_token = "123:abc".into();
        settings.notifications.telegram.chat_id = "42".into();
        assert!(channel.enabled(&settings, &cancellation()));
    }
}
