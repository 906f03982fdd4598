// src/domain/schedule/slot_time.rs
//! Decoding of slot labels such as `"9AM-10AM"` into wall-clock hours.
//!
//! Labels are opaque keys everywhere else; this module is the only place
//! that assigns them a meaning in time. A label that cannot be decoded is
//! still a valid, bookable slot, it just has no timing.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Start and end hour (24-hour clock) decoded from a slot label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTime {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl SlotTime {
    /// Parses `"<start><AM|PM>-<end><AM|PM>"`.
    ///
    /// Each side carries its own meridiem; a side written without one
    /// borrows it from the other side (`"9-10AM"`). Returns `None` when the
    /// label does not follow the pattern.
    pub fn parse(label: &str) -> Option<Self> {
        let (start, end) = label.split_once('-')?;
        let (start_hour, start_meridiem) = split_side(start)?;
        let (end_hour, end_meridiem) = split_side(end)?;

        let (start_meridiem, end_meridiem) = match (start_meridiem, end_meridiem) {
            (Some(s), Some(e)) => (s, e),
            (Some(s), None) => (s, s),
            // "11-12PM" runs from late morning into noon.
            (None, Some(Meridiem::Pm)) if end_hour == 12 && start_hour != 12 => {
                (Meridiem::Am, Meridiem::Pm)
            }
            (None, Some(e)) => (e, e),
            (None, None) => return None,
        };

        Some(Self {
            start_hour: to_24_hour(start_hour, start_meridiem),
            end_hour: to_24_hour(end_hour, end_meridiem),
        })
    }

    /// Start and end instants of the slot on `date`. A slot whose end is not
    /// after its start (e.g. `"11PM-12AM"`) ends on the following day.
    pub fn range_on(&self, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = date.and_hms_opt(self.start_hour, 0, 0)?;
        let mut end = date.and_hms_opt(self.end_hour, 0, 0)?;
        if end <= start {
            end += Duration::days(1);
        }
        Some((start, end))
    }
}

fn split_side(raw: &str) -> Option<(u32, Option<Meridiem>)> {
    let side = raw.trim().to_ascii_uppercase();
    let (digits, meridiem) = if let Some(rest) = side.strip_suffix("AM") {
        (rest.trim(), Some(Meridiem::Am))
    } else if let Some(rest) = side.strip_suffix("PM") {
        (rest.trim(), Some(Meridiem::Pm))
    } else {
        (side.as_str(), None)
    };

    let hour: u32 = digits.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    Some((hour, meridiem))
}

fn to_24_hour(hour: u32, meridiem: Meridiem) -> u32 {
    match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    }
}

/// Ordering key used wherever slots are listed: start hour, unparseable
/// labels first.
pub fn sort_key(label: &str) -> u32 {
    SlotTime::parse(label).map_or(0, |t| t.start_hour)
}

/// Where `now` sits relative to a slot on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SlotPhase {
    Upcoming { starts_in_minutes: i64 },
    InProgress { ends_in_minutes: i64 },
    Elapsed,
    Unknown,
}

impl SlotPhase {
    pub fn at(label: &str, date: NaiveDate, now: NaiveDateTime) -> Self {
        let Some((start, end)) = SlotTime::parse(label).and_then(|t| t.range_on(date)) else {
            return Self::Unknown;
        };

        if now < start {
            Self::Upcoming {
                starts_in_minutes: (start - now).num_minutes(),
            }
        } else if now < end {
            Self::InProgress {
                ends_in_minutes: (end - now).num_minutes(),
            }
        } else {
            Self::Elapsed
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }
}

/// True when the slot's end time on `date` is at or before `now`.
/// Unparseable labels never elapse.
pub fn has_elapsed(label: &str, date: NaiveDate, now: NaiveDateTime) -> bool {
    SlotTime::parse(label)
        .and_then(|t| t.range_on(date))
        .is_some_and(|(_, end)| now >= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    #[test]
    fn parses_morning_slot() {
        let t = SlotTime::parse("9AM-10AM").unwrap();
        assert_eq!((t.start_hour, t.end_hour), (9, 10));
    }

    #[test]
    fn noon_stays_twelve_and_pm_adds_twelve() {
        let t = SlotTime::parse("12PM-1PM").unwrap();
        assert_eq!((t.start_hour, t.end_hour), (12, 13));
    }

    #[test]
    fn midnight_becomes_hour_zero() {
        let t = SlotTime::parse("12AM-1AM").unwrap();
        assert_eq!((t.start_hour, t.end_hour), (0, 1));
    }

    #[test]
    fn each_side_keeps_its_own_meridiem() {
        let t = SlotTime::parse("11AM-12PM").unwrap();
        assert_eq!((t.start_hour, t.end_hour), (11, 12));

        let t = SlotTime::parse("12PM-1PM").unwrap();
        assert_eq!(t.end_hour, 13);
    }

    #[test]
    fn missing_meridiem_is_borrowed_from_the_other_side() {
        let t = SlotTime::parse("2-3PM").unwrap();
        assert_eq!((t.start_hour, t.end_hour), (14, 15));

        let t = SlotTime::parse("11-12PM").unwrap();
        assert_eq!((t.start_hour, t.end_hour), (11, 12));
    }

    #[test]
    fn malformed_labels_have_no_timing() {
        for label in ["Lunch", "9AM", "13PM-2PM", "0AM-1AM", "9-10", "AM-PM", ""] {
            assert!(SlotTime::parse(label).is_none(), "{label} should not parse");
        }
    }

    #[test]
    fn range_rolls_over_midnight() {
        let (start, end) = SlotTime::parse("11PM-12AM")
            .unwrap()
            .range_on(date())
            .unwrap();
        assert_eq!(end - start, Duration::hours(1));
    }

    #[test]
    fn phase_tracks_the_clock() {
        let at = |h: u32, m: u32| date().and_hms_opt(h, m, 0).unwrap();

        assert_eq!(
            SlotPhase::at("9AM-10AM", date(), at(8, 30)),
            SlotPhase::Upcoming {
                starts_in_minutes: 30
            }
        );
        assert!(SlotPhase::at("9AM-10AM", date(), at(9, 15)).is_current());
        assert_eq!(SlotPhase::at("9AM-10AM", date(), at(10, 0)), SlotPhase::Elapsed);
        assert_eq!(SlotPhase::at("Lunch", date(), at(10, 0)), SlotPhase::Unknown);
    }

    #[test]
    fn elapsed_is_inclusive_of_the_end_instant() {
        let end = date().and_hms_opt(10, 0, 0).unwrap();
        assert!(has_elapsed("9AM-10AM", date(), end));
        assert!(!has_elapsed("9AM-10AM", date(), end - Duration::minutes(1)));
        assert!(!has_elapsed("Lunch", date(), end));
    }

    #[test]
    fn sort_key_orders_by_start_hour() {
        let mut labels = vec!["1PM-2PM", "10AM-11AM", "9AM-10AM", "Lunch"];
        labels.sort_by_key(|l| sort_key(l));
        assert_eq!(labels, vec!["Lunch", "9AM-10AM", "10AM-11AM", "1PM-2PM"]);
    }
}
