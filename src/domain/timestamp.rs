// src/domain/timestamp.rs
//! Serde adapter for stored timestamps.
//!
//! Documents written by this crate carry RFC 3339 instants. Older documents
//! carry naive ISO-8601 wall-clock values (`2025-03-03T09:15:00.123456`);
//! those are read as UTC. Writing always produces RFC 3339.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an RFC 3339 instant or a naive ISO-8601 timestamp.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    value.serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
}

pub mod option {
    use super::parse;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reads_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 3, 9, 15, 0).unwrap();
        assert_eq!(parse("2025-03-03T09:15:00Z"), Some(expected));
        assert_eq!(parse("2025-03-03T10:15:00+01:00"), Some(expected));
        assert_eq!(parse("2025-03-03T09:15:00"), Some(expected));
        assert_eq!(
            parse("2025-03-03T09:15:00.123456").map(|t| t.timestamp()),
            Some(expected.timestamp())
        );
        assert_eq!(parse("03/03/2025 9:15"), None);
    }
}
