//! Due date acceptance rules.
//!
//! # Invariants
//! - Strings must name a real calendar date (`2024-02-30` is rejected).
//! - Numbers are Unix epoch milliseconds within the JavaScript `Date` range,
//!   which is what mobile clients send for picked dates.
//! - A blank string is treated as an unset date.

use crate::model::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Largest absolute epoch offset (ms) a client-side date can represent.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Returns whether `value` is acceptable as a task due date.
pub fn is_valid_due_date(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed.is_empty() || parse_due_date(trimmed).is_some()
        }
        Value::Number(number) => {
            let millis = number.as_f64();
            millis.is_finite() && millis.abs() <= MAX_EPOCH_MILLIS
        }
        Value::Bool(_) | Value::Sequence(_) | Value::Mapping(_) => false,
    }
}

/// Parses a due date string into UTC wall-clock time.
///
/// Offsets in RFC 3339 / RFC 2822 input are applied; other forms are taken
/// as-is and date-only forms resolve to midnight.
pub fn parse_due_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.naive_utc());
    }
    if let Some(parsed) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(parsed);
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
