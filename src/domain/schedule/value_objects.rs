// src/domain/schedule/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::calendar::{self, SaturdayPolicy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const ENTITY_ID_SEPARATOR: char = '|';

/// A (room, day, slot) triple: the atomic unit of booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingKey {
    pub room: String,
    pub day: String,
    pub slot: String,
}

impl BookingKey {
    pub fn new(
        room: impl Into<String>,
        day: impl Into<String>,
        slot: impl Into<String>,
    ) -> DomainResult<Self> {
        let key = Self {
            room: room.into(),
            day: day.into(),
            slot: slot.into(),
        };
        for (field, value) in [("room", &key.room), ("day", &key.day), ("slot", &key.slot)] {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("{field} cannot be empty")));
            }
            if value.contains(ENTITY_ID_SEPARATOR) {
                return Err(DomainError::Validation(format!(
                    "{field} cannot contain '{ENTITY_ID_SEPARATOR}'"
                )));
            }
        }
        Ok(key)
    }

    /// Audit entity id, `"{room}|{day}|{slot}"`.
    pub fn entity_id(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.room,
            self.day,
            self.slot,
            sep = ENTITY_ID_SEPARATOR
        )
    }

    pub fn from_entity_id(entity_id: &str) -> Option<Self> {
        let mut parts = entity_id.split(ENTITY_ID_SEPARATOR);
        let (room, day, slot) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        Self::new(room, day, slot).ok()
    }
}

impl fmt::Display for BookingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} {}", self.room, self.day, self.slot)
    }
}

/// How a caller names the day of a booking: a calendar date (resolved
/// through the Saturday policy) or a bare day label such as `"Monday"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DaySelector {
    Date(NaiveDate),
    Label(String),
}

impl DaySelector {
    /// Resolves to the schedule's day key. A date without a schedule (a
    /// holiday Saturday) is a `NotFound`.
    pub fn resolve(&self, policy: &SaturdayPolicy) -> DomainResult<String> {
        match self {
            Self::Label(label) => Ok(label.clone()),
            Self::Date(date) => calendar::day_label(*date, policy).ok_or_else(|| {
                DomainError::NotFound(format!("no schedule on {date}: non-working Saturday"))
            }),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Label(_) => None,
        }
    }
}

impl TryFrom<String> for DaySelector {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("day cannot be empty".into()));
        }
        Ok(match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => Self::Date(date),
            Err(_) => Self::Label(trimmed.to_string()),
        })
    }
}

impl From<DaySelector> for String {
    fn from(value: DaySelector) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Label(label) => f.write_str(label),
        }
    }
}
