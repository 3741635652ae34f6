use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::errors::{Error, Result, ValidationError};

/// Parses a timestamp as emitted by the holdings API.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`, with any offset), naive ISO date-times
/// (`2024-05-01T10:00:00.123`, `2024-05-01 10:00:00`) which are taken as UTC, and bare
/// dates (`2024-05-01`) which resolve to midnight UTC.
pub fn parse_api_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidInput("empty timestamp".to_string()).into());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::Unexpected(format!("midnight is not representable on {}", date)))
}

/// Serde adapter for [`parse_api_timestamp`].
pub fn deserialize_api_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_api_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Absolute number of whole days between two instants.
pub fn days_between(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_days().abs()
}
