//! Total field transformations from raw source values to destination values.
//!
//! None of these functions fail: missing or malformed input maps to a
//! documented fallback.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use chrono_tz::Tz;

use super::tables::{PrivacyTable, StatusTable};
use crate::record::{Privacy, Status};

/// Maximum description length accepted by the destination, in code points.
pub const DESCRIPTION_LIMIT: usize = 2000;

/// Offset-less date-time layouts, all read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Map a raw status label through an origin-specific table.
#[inline]
#[must_use]
pub fn map_status(table: &StatusTable, raw: Option<&str>) -> Status {
    table.resolve(raw)
}

/// Map a raw privacy label through an origin-specific table.
#[inline]
#[must_use]
pub fn map_privacy(table: &PrivacyTable, raw: Option<&str>) -> Privacy {
    table.resolve(raw)
}

/// Split a comma-separated value into a set of trimmed, non-empty entries.
///
/// Order of first occurrence is kept and duplicates are dropped.
#[must_use]
pub fn map_multi_value_field(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) => multi_value_from_keys(raw.split(',')),
        None => Vec::new(),
    }
}

/// Build a multi-value set from an existing collection (e.g. the keys of a
/// language histogram), applying the same trimming and de-duplication as
/// [`map_multi_value_field`].
#[must_use]
pub fn multi_value_from_keys<I, S>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values: Vec<String> = Vec::new();
    for key in keys {
        let key = key.as_ref().trim();
        if key.is_empty() || values.iter().any(|v| v == key) {
            continue;
        }
        values.push(key.to_string());
    }
    values
}

/// Truncate a description to at most `max` code points.
///
/// A missing description becomes the empty string.
#[must_use]
pub fn truncate_description(raw: Option<&str>, max: usize) -> String {
    match raw {
        Some(text) => text.chars().take(max).collect(),
        None => String::new(),
    }
}

/// Normalize a raw timestamp string into the target zone.
///
/// Accepted inputs:
/// - RFC 3339 instants, converted to `zone` and rendered with the zone offset;
/// - bare dates (`YYYY-MM-DD`), passed through unchanged;
/// - naive date-times (`YYYY-MM-DDTHH:MM:SS` or with a space separator,
///   optional fractional seconds), read as UTC.
///
/// Anything else, including missing input, yields `None`, which means the date
/// property is left out of the write.
#[must_use]
pub fn normalize_timestamp(raw: Option<&str>, zone: Tz) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return normalize_instant(Some(instant.with_timezone(&Utc)), zone);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.format("%Y-%m-%d").to_string());
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return normalize_instant(Some(naive.and_utc()), zone);
        }
    }

    tracing::debug!(value = raw, "Unrecognized timestamp, omitting date");
    None
}

/// Render an instant in the target zone as an RFC 3339 string.
#[must_use]
pub fn normalize_instant(instant: Option<DateTime<Utc>>, zone: Tz) -> Option<String> {
    instant.map(|t| {
        t.with_timezone(&zone)
            .to_rfc3339_opts(SecondsFormat::AutoSi, false)
    })
}
