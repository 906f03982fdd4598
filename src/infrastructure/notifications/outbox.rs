// src/infrastructure/notifications/outbox.rs
use crate::{application::ports::notifier::Notifier, domain::notification::Notification};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

/// A bounded outbox and the receiving end its dispatcher drains.
pub fn outbox(capacity: usize) -> (OutboxNotifier, mpsc::Receiver<Notification>) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (OutboxNotifier { sender }, receiver)
}

#[derive(Clone)]
pub struct OutboxNotifier {
    sender: mpsc::Sender<Notification>,
}

impl Notifier for OutboxNotifier {
    fn notify(&self, notification: Notification) {
        match self.sender.try_send(notification) {
            Ok(()) => debug!("notification queued"),
            Err(TrySendError::Full(n)) => warn!(
                kind = n.kind.as_str(),
                recipient = %n.recipient,
                "notification outbox full; dropping"
            ),
            Err(TrySendError::Closed(n)) => warn!(
                kind = n.kind.as_str(),
                recipient = %n.recipient,
                "notification dispatcher stopped; dropping"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationKind;

    fn confirmation(recipient: &str) -> Notification {
        Notification {
            kind: NotificationKind::BookingConfirmation,
            recipient: recipient.into(),
            room: "Room1".into(),
            date: "2025-03-03".into(),
            slot: "9AM-10AM".into(),
            reason: None,
        }
    }

    #[tokio::test]
    async fn full_outbox_drops_without_blocking() {
        let (notifier, mut rx) = outbox(1);
        notifier.notify(confirmation("a@uni.edu"));
        notifier.notify(confirmation("b@uni.edu"));

        assert_eq!(rx.recv().await.unwrap().recipient, "a@uni.edu");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_outbox_is_not_an_error() {
        let (notifier, rx) = outbox(4);
        drop(rx);
        notifier.notify(confirmation("a@uni.edu"));
    }
}
