// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, FixedOffset, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Parses `+05:30`, `-03:00`, `Z` or `UTC` into a fixed offset.
pub fn parse_utc_offset(value: &str) -> Option<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }
    let (sign, rest) = match value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_offsets() {
        assert_eq!(parse_utc_offset("+05:30"), FixedOffset::east_opt(19_800));
        assert_eq!(parse_utc_offset("-03:00"), FixedOffset::west_opt(10_800));
        assert_eq!(parse_utc_offset("UTC"), FixedOffset::east_opt(0));
        assert_eq!(parse_utc_offset("+2"), FixedOffset::east_opt(7_200));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_utc_offset("05:30"), None);
        assert_eq!(parse_utc_offset("+25:00"), None);
        assert_eq!(parse_utc_offset(""), None);
    }
}
