// src/infrastructure/notifications/dispatcher.rs
use super::channels::NotificationChannel;
use crate::domain::{
    notification::Notification,
    settings::{Settings, SettingsRepository},
};
use std::{sync::Arc, time::Duration};
use tokio::{sync::mpsc, task::JoinSet};
use tracing::{debug, info, warn};

/// Retry schedule for one delivery on one channel.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Attempts including the first one.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    /// Backoff doubles after every failure up to this cap.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

pub struct NotificationDispatcher {
    receiver: mpsc::Receiver<Notification>,
    channels: Vec<Arc<dyn NotificationChannel>>,
    settings: Arc<dyn SettingsRepository>,
    retry: RetryPolicy,
}

impl NotificationDispatcher {
    pub fn new(
        receiver: mpsc::Receiver<Notification>,
        channels: Vec<Arc<dyn NotificationChannel>>,
        settings: Arc<dyn SettingsRepository>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            receiver,
            channels,
            settings,
            retry,
        }
    }

    /// Drains the outbox until every sender is dropped. Each channel
    /// delivery runs as its own task, so a delivery that is backing off
    /// does not hold up the notifications queued behind it. Deliveries
    /// still in flight are awaited before returning.
    pub async fn run(mut self) {
        let mut in_flight = JoinSet::new();
        while let Some(notification) = self.receiver.recv().await {
            while in_flight.try_join_next().is_some() {}
            self.spawn_deliveries(&mut in_flight, notification).await;
        }
        while in_flight.join_next().await.is_some() {}
        info!("notification dispatcher stopped");
    }

    /// Delivers one notification on every enabled channel and waits for
    /// all of them, retries included.
    pub async fn dispatch(&self, notification: &Notification) {
        let mut deliveries = JoinSet::new();
        self.spawn_deliveries(&mut deliveries, notification.clone())
            .await;
        while deliveries.join_next().await.is_some() {}
    }

    async fn spawn_deliveries(&self, tasks: &mut JoinSet<()>, notification: Notification) {
        let settings = match self.settings.load().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "settings unavailable; dispatching with defaults");
                Settings::default()
            }
        };
        let settings = Arc::new(settings);
        let notification = Arc::new(notification);

        for channel in &self.channels {
            if channel.enabled(&settings, &notification) {
                tasks.spawn(deliver(
                    Arc::clone(channel),
                    Arc::clone(&settings),
                    Arc::clone(&notification),
                    self.retry.clone(),
                ));
            } else {
                debug!(channel = channel.name(), "channel disabled");
            }
        }
    }
}

async fn deliver(
    channel: Arc<dyn NotificationChannel>,
    settings: Arc<Settings>,
    notification: Arc<Notification>,
    retry: RetryPolicy,
) {
    let max_attempts = retry.max_attempts.max(1);
    for attempt in 1..=max_attempts {
        match channel.deliver(&settings, &notification).await {
            Ok(()) => {
                debug!(channel = channel.name(), attempt, "notification delivered");
                return;
            }
            Err(err) if attempt < max_attempts => {
                let delay = retry.backoff(attempt);
                debug!(
                    channel = channel.name(),
                    attempt,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "delivery failed; retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => warn!(
                channel = channel.name(),
                kind = notification.kind.as_str(),
                recipient = %notification.recipient,
                attempts = max_attempts,
                error = %err,
                "notification dropped after retries"
            ),
        }
    }
}
