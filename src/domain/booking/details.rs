// src/domain/booking/details.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_BOOKING_TITLE: &str = "Untitled Booking";

/// Free-form information a teacher attaches to a booking. Stored in the
/// BOOK audit event, never in the schedule itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub attendees: u32,
    #[serde(default)]
    pub notify: bool,
}

impl BookingDetails {
    /// Trims text fields and falls back to the default title.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            self.title = DEFAULT_BOOKING_TITLE.to_string();
        }
        self.purpose = self.purpose.trim().to_string();
        self
    }

    pub fn audit_details(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "purpose": self.purpose,
            "attendees": self.attendees,
            "notify": self.notify,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_gets_default() {
        let d = BookingDetails {
            title: "   ".into(),
            ..BookingDetails::default()
        }
        .normalized();
        assert_eq!(d.title, DEFAULT_BOOKING_TITLE);
        assert_eq!(d.audit_details()["attendees"], 0);
    }
}
