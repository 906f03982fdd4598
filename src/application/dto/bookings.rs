// src/application/dto/bookings.rs
use super::waitlist::WaitlistEntryDto;
use crate::domain::schedule::{BookingKey, SlotPhase};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomSummaryDto {
    pub name: String,
    pub days: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingOutcomeDto {
    pub room: String,
    pub day: String,
    pub slot: String,
    pub title: String,
    /// Advisory faculty conflicts; never block the booking.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CancellationDto {
    pub room: String,
    pub day: String,
    pub slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<WaitlistEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExpiredSlotDto {
    pub room: String,
    pub day: String,
    pub slot: String,
}

impl From<BookingKey> for ExpiredSlotDto {
    fn from(key: BookingKey) -> Self {
        Self {
            room: key.room,
            day: key.day,
            slot: key.slot,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlotDto {
    pub slot: String,
    pub occupied: bool,
    /// `upcoming`, `in_progress`, `elapsed` or `unknown`; only set when the
    /// view is for today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_in_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_in_minutes: Option<i64>,
}

impl SlotDto {
    pub fn new(slot: String, occupied: bool, phase: Option<SlotPhase>) -> Self {
        let (label, starts_in_minutes, ends_in_minutes) = match phase {
            None => (None, None, None),
            Some(SlotPhase::Upcoming { starts_in_minutes }) => {
                (Some("upcoming"), Some(starts_in_minutes), None)
            }
            Some(SlotPhase::InProgress { ends_in_minutes }) => {
                (Some("in_progress"), None, Some(ends_in_minutes))
            }
            Some(SlotPhase::Elapsed) => (Some("elapsed"), None, None),
            Some(SlotPhase::Unknown) => (Some("unknown"), None, None),
        };
        Self {
            slot,
            occupied,
            phase: label.map(str::to_string),
            starts_in_minutes,
            ends_in_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomDayDto {
    pub room: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub day: String,
    pub slots: Vec<SlotDto>,
    pub free: usize,
    pub total: usize,
    /// Bookings released by the expiry sweep that ran for this view.
    pub expired: Vec<ExpiredSlotDto>,
    /// Occupied slots the caller booked and may cancel.
    pub my_bookings: Vec<String>,
}
