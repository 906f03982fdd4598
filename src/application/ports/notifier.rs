// src/application/ports/notifier.rs
use crate::domain::notification::Notification;

/// Fire-and-forget delivery boundary. Implementations never fail towards
/// the caller; delivery problems are theirs to log.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
