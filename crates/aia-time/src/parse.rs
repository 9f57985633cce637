//! Timestamp parsing helpers.
//!
//! Response tables write times as `2010-05-01T00:00:00.000`; callers tend to
//! pass `2010-10-24 15:00:00` or a bare date.  All of these are accepted, with
//! an optional trailing `Z`.

use aia_core::errors::{Error, Result};
use aia_core::Timestamp;
use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a timestamp string.
///
/// # Errors
/// Returns `Error::Parse` if the string matches none of the accepted formats.
pub fn parse_timestamp(s: &str) -> Result<Timestamp> {
    let s = s.trim();
    let s = s.strip_suffix('Z').unwrap_or(s);

    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts);
        }
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::Parse(format!("unrecognised timestamp '{s}'")))
}

/// Build a timestamp from calendar fields.
///
/// # Errors
/// Returns `Error::InvalidArgument` if the fields do not name a real instant.
pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Result<Timestamp> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{min:02}:{sec:02} is not a valid time"
            ))
        })
}

/// Anything that names an instant: a timestamp, a date, or a string in one
/// of the formats accepted by [`parse_timestamp`].
pub trait IntoTimestamp {
    /// Resolve to a timestamp.
    fn into_timestamp(self) -> Result<Timestamp>;
}

impl IntoTimestamp for Timestamp {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(self)
    }
}

impl IntoTimestamp for &Timestamp {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(*self)
    }
}

impl IntoTimestamp for NaiveDate {
    fn into_timestamp(self) -> Result<Timestamp> {
        self.and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::InvalidArgument(format!("no midnight on {self}")))
    }
}

impl IntoTimestamp for &str {
    fn into_timestamp(self) -> Result<Timestamp> {
        parse_timestamp(self)
    }
}

impl IntoTimestamp for String {
    fn into_timestamp(self) -> Result<Timestamp> {
        parse_timestamp(&self)
    }
}

impl IntoTimestamp for &String {
    fn into_timestamp(self) -> Result<Timestamp> {
        parse_timestamp(self)
    }
}

/// Format a timestamp the way response tables write it.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}
