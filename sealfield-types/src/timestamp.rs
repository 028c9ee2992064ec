//! Timestamp and calendar date grammars.
//!
//! Timestamps are held as UTC instants. Parsing accepts:
//! - RFC 3339 with any offset (normalised to UTC)
//! - naive ISO-8601 date-times, `T` or space separated, optional fraction
//!   (taken as UTC; legacy documents were written this way)
//! - a bare `YYYY-MM-DD` date (midnight UTC)
//!
//! Calendar dates are plain `YYYY-MM-DD`.

use crate::{TypesError, TypesResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a timestamp from its ISO-8601 text form.
pub fn parse_timestamp(s: &str) -> TypesResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(TypesError::InvalidTimestamp(s.to_string()))
}

/// Formats a timestamp as RFC 3339 in UTC with the minimal sub-second precision.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses a calendar date (`YYYY-MM-DD`).
pub fn parse_calendar_date(s: &str) -> TypesResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| TypesError::InvalidDate(s.to_string()))
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_calendar_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
