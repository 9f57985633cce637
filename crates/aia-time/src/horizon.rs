//! Flat-hold horizon.
//!
//! Calibration tables end at the last measured epoch.  Queries past that
//! point hold the last measured value until the horizon below, which sits
//! decades beyond any observation a current pipeline will process.

use aia_core::Timestamp;
use chrono::NaiveDate;

/// Year, month, and day of the default flat-hold anchor (midnight UTC).
pub const FLAT_HOLD_HORIZON_YMD: (i32, u32, u32) = (2040, 5, 1);

/// The default flat-hold anchor, `2040-05-01T00:00:00`.
pub fn default_flat_hold_horizon() -> Timestamp {
    let (y, m, d) = FLAT_HOLD_HORIZON_YMD;
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(Timestamp::MAX)
}
