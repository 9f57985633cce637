//! `TimeRange` — the closed span `[start, end]` covered by a series.

use aia_core::errors::{Error, Result};
use aia_core::{Real, Timestamp};

/// Elapsed seconds from `from` to `to` (negative if `to` is earlier).
///
/// Nanosecond resolution for spans up to about 292 years, microseconds
/// beyond that.
pub fn seconds_between(from: Timestamp, to: Timestamp) -> Real {
    let elapsed = to.signed_duration_since(from);
    match elapsed.num_nanoseconds() {
        Some(ns) => ns as Real / 1e9,
        None => match elapsed.num_microseconds() {
            Some(us) => us as Real / 1e6,
            None => elapsed.num_milliseconds() as Real / 1e3,
        },
    }
}

/// A closed interval of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: Timestamp,
    end: Timestamp,
}

impl TimeRange {
    /// Create a range.
    ///
    /// # Errors
    /// Returns an error if `end < start`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidArgument(format!(
                "range end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First instant in the range.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Last instant in the range.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Return `true` if `t` lies in `[start, end]`.
    pub fn contains(&self, t: Timestamp) -> bool {
        t >= self.start && t <= self.end
    }

    /// Return `true` if `t` is strictly before the range.
    pub fn precedes(&self, t: Timestamp) -> bool {
        t < self.start
    }

}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
