// src/domain/notification/entity.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    BookingConfirmation,
    BookingCancellation,
    BookingReminder,
    WaitlistPromotion,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookingConfirmation => "BOOKING_CONFIRMATION",
            Self::BookingCancellation => "BOOKING_CANCELLATION",
            Self::BookingReminder => "BOOKING_REMINDER",
            Self::WaitlistPromotion => "WAITLIST_PROMOTION",
        }
    }
}

/// A delivery request handed to the notifier after a booking transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub recipient: String,
    pub room: String,
    pub date: String,
    pub slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Notification {
    pub fn subject(&self) -> String {
        match self.kind {
            NotificationKind::BookingConfirmation => {
                format!("Room Booking Confirmed: {}", self.room)
            }
            NotificationKind::BookingCancellation => {
                format!("Room Booking Cancelled: {}", self.room)
            }
            NotificationKind::BookingReminder => {
                format!("Room Booking Reminder: {} in 30 minutes", self.room)
            }
            NotificationKind::WaitlistPromotion => {
                format!("Slot Available: {} {} {}", self.room, self.date, self.slot)
            }
        }
    }

    pub fn body(&self) -> String {
        let where_when = format!(
            "Room: {}\nDate: {}\nTime: {}",
            self.room, self.date, self.slot
        );
        let text = match self.kind {
            NotificationKind::BookingConfirmation => format!(
                "Your room booking has been confirmed:\n\n{where_when}\nBooked by: {}\n\n\
                 This booking will automatically expire when the time slot ends.",
                self.recipient
            ),
            NotificationKind::BookingCancellation => format!(
                "Your room booking has been cancelled:\n\n{where_when}\nCancelled by: {}\n\
                 Reason: {}\n\nThe slot is now available for other users to book.",
                self.recipient,
                self.reason
                    .as_deref()
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or("Not specified")
            ),
            NotificationKind::BookingReminder => format!(
                "Reminder: your room booking starts in 30 minutes\n\n{where_when}\n\n\
                 The room becomes available again after your slot ends."
            ),
            NotificationKind::WaitlistPromotion => format!(
                "A slot you were waiting for is now free:\n\n{where_when}\n\n\
                 Book it soon; it is not held for you."
            ),
        };
        format!("{text}\n\nDepartment Portal")
    }

    /// One-line summary used by the in-app centre.
    pub fn summary(&self) -> String {
        format!("{} - {} {}", self.room, self.date, self.slot)
    }
}

/// A row of `notifications.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InAppNotification {
    pub id: Uuid,
    pub recipient: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(with = "crate::domain::timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl InAppNotification {
    pub fn from_notification(notification: &Notification, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient: notification.recipient.clone(),
            kind: notification.kind,
            title: notification.subject(),
            message: notification.summary(),
            timestamp,
            read: false,
        }
    }

    pub fn is_for(&self, recipient: &str) -> bool {
        self.recipient.eq_ignore_ascii_case(recipient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cancellation(reason: Option<&str>) -> Notification {
        Notification {
            kind: NotificationKind::BookingCancellation,
            recipient: "a@uni.edu".into(),
            room: "Room1".into(),
            date: "2025-03-03".into(),
            slot: "9AM-10AM".into(),
            reason: reason.map(str::to_string),
        }
    }

    #[test]
    fn cancellation_reason_defaults() {
        assert!(cancellation(None).body().contains("Reason: Not specified"));
        assert!(cancellation(Some("room change")).body().contains("Reason: room change"));
        assert_eq!(cancellation(None).subject(), "Room Booking Cancelled: Room1");
    }

    #[test]
    fn in_app_record_uses_type_field() {
        let record = InAppNotification::from_notification(
            &cancellation(None),
            DateTime::<Utc>::default(),
        );
        let v = serde_json::to_value(&record).unwrap();
        assert_eq!(v["type"], "BOOKING_CANCELLATION");
        assert_eq!(v["read"], false);
        assert_eq!(v["message"], "Room1 - 2025-03-03 9AM-10AM");
    }
}
