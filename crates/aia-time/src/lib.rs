//! # aia-time
//!
//! Timestamp parsing, elapsed-time arithmetic, coverage ranges, and the
//! flat-hold horizon used when extending calibration tables into the future.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The far-future anchor used for flat-hold extrapolation.
pub mod horizon;

/// Parsing timestamps from calibration tables and query strings.
pub mod parse;

/// `TimeRange` and elapsed-time helpers.
pub mod range;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use aia_core::Timestamp;
pub use horizon::default_flat_hold_horizon;
pub use parse::{format_timestamp, parse_timestamp, timestamp, IntoTimestamp};
pub use range::{seconds_between, TimeRange};
