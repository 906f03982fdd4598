// src/infrastructure/notifications/mod.rs
//! Outbox-based notification delivery.
//!
//! Application code hands notifications to [`OutboxNotifier`], which only
//! enqueues. A [`NotificationDispatcher`] task drains the queue and fans each
//! notification out to the enabled channels, retrying failed deliveries with
//! exponential backoff.

mod channels;
mod dispatcher;
mod outbox;

pub use channels::{ChannelError, EmailChannel, InAppChannel, NotificationChannel, TelegramChannel};
pub use dispatcher::{NotificationDispatcher, RetryPolicy};
pub use outbox::{OutboxNotifier, outbox};
