// src/domain/schedule/calendar.rs
//! Mapping of calendar dates onto the day labels used as schedule keys,
//! including the "every Saturday except the 3rd" working-day policy.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub const WEEK_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const HOLIDAY_SATURDAY_ORDINAL: u32 = 3;

/// Which Saturdays carry a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaturdayPolicy {
    pub saturdays_enabled: bool,
    pub exclude_third_saturday: bool,
}

impl Default for SaturdayPolicy {
    fn default() -> Self {
        Self {
            saturdays_enabled: true,
            exclude_third_saturday: true,
        }
    }
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEK_ORDER[date.weekday().num_days_from_monday() as usize]
}

/// 1-based position of a Saturday within its month, `None` for other days.
pub fn saturday_ordinal(date: NaiveDate) -> Option<u32> {
    if date.weekday() != Weekday::Sat {
        return None;
    }
    let first_of_month = date.with_day(1)?;
    let offset = (5 + 7 - first_of_month.weekday().num_days_from_monday()) % 7;
    let first_saturday = 1 + offset;
    Some((date.day() - first_saturday) / 7 + 1)
}

pub fn is_holiday_saturday(date: NaiveDate) -> bool {
    saturday_ordinal(date) == Some(HOLIDAY_SATURDAY_ORDINAL)
}

/// Any non-Saturday counts as working; Saturdays work unless they are the 3rd.
pub fn is_working_saturday(date: NaiveDate) -> bool {
    !is_holiday_saturday(date)
}

/// The schedule key for `date`, or `None` when the date has no schedule
/// under `policy` (no day-key match).
pub fn day_label(date: NaiveDate, policy: &SaturdayPolicy) -> Option<String> {
    if date.weekday() == Weekday::Sat {
        if !policy.saturdays_enabled {
            return None;
        }
        if policy.exclude_third_saturday && is_holiday_saturday(date) {
            return None;
        }
    }
    Some(weekday_label(date).to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaturdayInfo {
    pub date: NaiveDate,
    pub ordinal: u32,
    pub is_working: bool,
}

/// All Saturdays of a month with their working status. Empty for an
/// invalid year/month.
pub fn saturday_schedule(year: i32, month: u32) -> Vec<SaturdayInfo> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter_map(|date| {
            saturday_ordinal(date).map(|ordinal| SaturdayInfo {
                date,
                ordinal,
                is_working: ordinal != HOLIDAY_SATURDAY_ORDINAL,
            })
        })
        .collect()
}

/// First working Saturday on or after `from`.
pub fn next_working_saturday(from: NaiveDate) -> NaiveDate {
    let days_until = (5 + 7 - from.weekday().num_days_from_monday()) % 7;
    let mut candidate = from + Duration::days(i64::from(days_until));
    while is_holiday_saturday(candidate) {
        candidate += Duration::days(7);
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn third_saturday_of_month_starting_on_saturday_is_the_fifteenth() {
        // March 2025 begins on a Saturday.
        assert_eq!(ymd(2025, 3, 1).weekday(), Weekday::Sat);

        assert!(is_holiday_saturday(ymd(2025, 3, 15)));
        assert!(is_working_saturday(ymd(2025, 3, 8)));
        assert!(is_working_saturday(ymd(2025, 3, 22)));
    }

    #[test]
    fn ordinal_counts_from_first_saturday() {
        // October 2026 begins on a Thursday; first Saturday is the 3rd.
        assert_eq!(saturday_ordinal(ymd(2026, 10, 3)), Some(1));
        assert_eq!(saturday_ordinal(ymd(2026, 10, 17)), Some(3));
        assert_eq!(saturday_ordinal(ymd(2026, 10, 31)), Some(5));
        assert_eq!(saturday_ordinal(ymd(2026, 10, 16)), None);
    }

    #[test]
    fn weekdays_are_always_working() {
        assert!(is_working_saturday(ymd(2026, 10, 16)));
    }

    #[test]
    fn day_label_refuses_holiday_saturday() {
        let policy = SaturdayPolicy::default();
        assert_eq!(day_label(ymd(2025, 3, 15), &policy), None);
        assert_eq!(day_label(ymd(2025, 3, 8), &policy).as_deref(), Some("Saturday"));
        assert_eq!(day_label(ymd(2025, 3, 10), &policy).as_deref(), Some("Monday"));
    }

    #[test]
    fn day_label_respects_policy_toggles() {
        let all_saturdays = SaturdayPolicy {
            saturdays_enabled: true,
            exclude_third_saturday: false,
        };
        assert_eq!(
            day_label(ymd(2025, 3, 15), &all_saturdays).as_deref(),
            Some("Saturday")
        );

        let no_saturdays = SaturdayPolicy {
            saturdays_enabled: false,
            exclude_third_saturday: true,
        };
        assert_eq!(day_label(ymd(2025, 3, 8), &no_saturdays), None);
    }

    #[test]
    fn monthly_schedule_lists_every_saturday() {
        let schedule = saturday_schedule(2025, 3);
        let days: Vec<u32> = schedule.iter().map(|s| s.date.day()).collect();
        assert_eq!(days, vec![1, 8, 15, 22, 29]);
        let holidays: Vec<u32> = schedule
            .iter()
            .filter(|s| !s.is_working)
            .map(|s| s.date.day())
            .collect();
        assert_eq!(holidays, vec![15]);
        assert!(saturday_schedule(2025, 13).is_empty());
    }

    #[test]
    fn next_working_saturday_skips_the_holiday() {
        assert_eq!(next_working_saturday(ymd(2025, 3, 10)), ymd(2025, 3, 22));
        assert_eq!(next_working_saturday(ymd(2025, 3, 8)), ymd(2025, 3, 8));
        assert_eq!(next_working_saturday(ymd(2025, 3, 2)), ymd(2025, 3, 8));
    }
}
