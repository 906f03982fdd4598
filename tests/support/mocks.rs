// tests/support/mocks.rs
use campus_portal::{
    application::ports::{notifier::Notifier, time::Clock},
    domain::notification::Notification,
};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Sunday 2025-03-02 08:00 UTC. No room has a Sunday timetable, so the
/// expiry sweep never touches fixtures unless a test moves the clock.
pub static SUNDAY_MORNING: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 3, 2, 8, 0, 0).unwrap());

/// Monday 2025-03-03 10:30 UTC, after the 9AM-10AM slot has ended.
pub static MONDAY_HALF_TEN: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 3, 3, 10, 30, 0).unwrap());

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}
