//! `CalibrationTable` — the immutable in-memory response table.

use crate::series::ChannelSeries;
use crate::wavelength::Wavelength;
use aia_core::errors::{Error, Result};
use aia_core::{Real, TimeSeries, Timestamp};
use std::collections::BTreeSet;

/// One row of a response table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationRecord {
    /// Channel the row belongs to.
    pub wavelength: Wavelength,
    /// Calibration epoch.
    pub timestamp: Timestamp,
    /// Effective area at that epoch (cm²).
    pub effective_area: Real,
}

impl CalibrationRecord {
    /// Create a record.
    pub fn new(wavelength: impl Into<Wavelength>, timestamp: Timestamp, effective_area: Real) -> Self {
        Self {
            wavelength: wavelength.into(),
            timestamp,
            effective_area,
        }
    }
}

/// Effective-area calibration rows for every channel.
///
/// Built once and never mutated.  Rows may arrive in any order.
#[derive(Debug, Clone, Default)]
pub struct CalibrationTable {
    records: Vec<CalibrationRecord>,
}

impl CalibrationTable {
    /// Build a table from rows.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if an effective area is negative or
    /// not finite, or if a channel has two rows at the same time.
    pub fn new(records: Vec<CalibrationRecord>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for r in &records {
            if !(r.effective_area.is_finite() && r.effective_area >= 0.0) {
                return Err(Error::InvalidArgument(format!(
                    "effective area for channel {} at {} must be finite and non-negative, got {}",
                    r.wavelength, r.timestamp, r.effective_area
                )));
            }
            if !seen.insert((r.wavelength, r.timestamp)) {
                return Err(Error::InvalidArgument(format!(
                    "channel {} has more than one row at {}",
                    r.wavelength, r.timestamp
                )));
            }
        }
        Ok(Self { records })
    }

    /// All rows, in input order.
    pub fn records(&self) -> &[CalibrationRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The distinct channels present, ascending.
    pub fn wavelengths(&self) -> Vec<Wavelength> {
        self.records
            .iter()
            .map(|r| r.wavelength)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The time-ordered samples of one channel.
    ///
    /// # Errors
    /// Returns `Error::NoDataForChannel` if no row matches `wavelength`.
    pub fn series_for(&self, wavelength: Wavelength) -> Result<ChannelSeries> {
        let samples: TimeSeries<Timestamp, Real> = self
            .records
            .iter()
            .filter(|r| r.wavelength == wavelength)
            .map(|r| (r.timestamp, r.effective_area))
            .collect();
        ChannelSeries::new(wavelength, samples)
    }
}
