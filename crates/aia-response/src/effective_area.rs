//! `EffectiveArea` — the calibration store and its sensitivity queries.
//!
//! For a channel and an observation time the store
//!
//! 1. extracts the channel's measured samples from the table,
//! 2. appends a flat-hold sample at the configured sentinel carrying the
//!    latest measurement, and
//! 3. interpolates the augmented series linearly in time.
//!
//! The ratio query divides that value by the earliest (launch) measurement.
//! Query times before the first measurement are extrapolated from the first
//! two samples and flagged, or rejected under the strict policy.

use crate::config::ResponseConfig;
use crate::reader::{read_table, read_table_file};
use crate::series::{AugmentedSeries, ChannelSeries};
use crate::table::CalibrationTable;
use crate::versions::latest_table_in_dir;
use crate::wavelength::{IntoWavelength, Wavelength};
use aia_core::errors::Result;
use aia_core::Real;
use aia_math::Evaluation;
use aia_time::{IntoTimestamp, TimeRange};
use std::io::BufRead;
use std::path::Path;

/// Effective-area calibration store for AIA channels.
///
/// Holds an immutable [`CalibrationTable`]; every query is independent and
/// read-only, so a store can be shared across threads by reference.
///
/// ```
/// use aia_response::{CalibrationRecord, CalibrationTable, EffectiveArea};
/// use aia_time::parse_timestamp;
///
/// let table = CalibrationTable::new(vec![
///     CalibrationRecord::new(171, parse_timestamp("2010-10-01").unwrap(), 100.0),
///     CalibrationRecord::new(171, parse_timestamp("2011-01-01").unwrap(), 90.0),
/// ])
/// .unwrap();
/// let store = EffectiveArea::with_defaults(table);
///
/// let ratio = store.effective_area_ratio(171, "2010-11-16").unwrap();
/// assert!((ratio - 0.95).abs() < 1e-12);
/// // Past the last measurement the value holds flat.
/// assert_eq!(store.effective_area(171, "2030-06-01").unwrap(), 90.0);
/// ```
#[derive(Debug, Clone)]
pub struct EffectiveArea {
    table: CalibrationTable,
    config: ResponseConfig,
}

impl EffectiveArea {
    // ── Construction ─────────────────────────────────────────────────────

    /// Wrap an in-memory table.
    pub fn new(table: CalibrationTable, config: ResponseConfig) -> Self {
        log::debug!(
            "effective-area store over {} rows, flat hold until {}, {} bounds",
            table.len(),
            config.flat_hold_until(),
            config.bounds_policy()
        );
        Self { table, config }
    }

    /// Wrap an in-memory table with the default configuration.
    pub fn with_defaults(table: CalibrationTable) -> Self {
        Self::new(table, ResponseConfig::default())
    }

    /// Parse a response table from `reader`.
    pub fn from_reader<R: BufRead>(reader: R, config: ResponseConfig) -> Result<Self> {
        let table = read_table(reader, config.layout())?;
        Ok(Self::new(table, config))
    }

    /// Load a response table from a local file.
    pub fn from_path(path: impl AsRef<Path>, config: ResponseConfig) -> Result<Self> {
        let table = read_table_file(path, config.layout())?;
        Ok(Self::new(table, config))
    }

    /// Load the newest `aia_V*_response_table.txt` found in `dir`.
    pub fn from_directory(dir: impl AsRef<Path>, config: ResponseConfig) -> Result<Self> {
        let path = latest_table_in_dir(dir)?;
        Self::from_path(path, config)
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// The underlying table.
    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    /// The configuration.
    pub fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// The channels present in the table, ascending.
    pub fn wavelengths(&self) -> Vec<Wavelength> {
        self.table.wavelengths()
    }

    /// First and last measurement times of a channel.
    pub fn coverage(&self, wavelength: impl IntoWavelength) -> Result<TimeRange> {
        self.series_for(wavelength)?.coverage()
    }

    // ── Series queries ───────────────────────────────────────────────────

    /// The measured samples of one channel.
    ///
    /// # Errors
    /// `Error::NoDataForChannel` if the table has no rows for `wavelength`.
    pub fn series_for(&self, wavelength: impl IntoWavelength) -> Result<ChannelSeries> {
        self.table.series_for(wavelength.into_wavelength()?)
    }

    /// The launch (earliest) effective area of a channel series.
    pub fn reference_value(&self, series: &ChannelSeries) -> Real {
        series.reference_value()
    }

    /// `series` extended with the flat-hold sample at the configured sentinel.
    ///
    /// # Errors
    /// `Error::Precondition` if a measurement is at or after the sentinel.
    pub fn augmented_series(&self, series: &ChannelSeries) -> Result<AugmentedSeries> {
        series.augmented(self.config.flat_hold_until())
    }

    // ── Sensitivity queries ──────────────────────────────────────────────

    /// Effective area of a channel at `time`, with diagnostics.
    ///
    /// # Errors
    /// * `Error::Parse` if `time` is an unparseable string.
    /// * `Error::NoDataForChannel` for an unknown channel.
    /// * `Error::TargetTimeOutOfBounds` outside the augmented series under
    ///   the strict policy.
    pub fn evaluate_effective_area(
        &self,
        wavelength: impl IntoWavelength,
        time: impl IntoTimestamp,
    ) -> Result<Evaluation<Real>> {
        let time = time.into_timestamp()?;
        let series = self.series_for(wavelength)?;
        self.evaluate_series(&series, time)
    }

    /// Effective area of a channel at `time`.
    ///
    /// Diagnostics are logged with `log::warn!`.
    pub fn effective_area(
        &self,
        wavelength: impl IntoWavelength,
        time: impl IntoTimestamp,
    ) -> Result<Real> {
        Ok(self
            .evaluate_effective_area(wavelength, time)?
            .into_logged_value())
    }

    /// Effective area at `time` divided by the launch value, with
    /// diagnostics.
    ///
    /// # Errors
    /// As [`evaluate_effective_area`](Self::evaluate_effective_area), plus
    /// `Error::Precondition` if the launch value is zero.
    pub fn evaluate_effective_area_ratio(
        &self,
        wavelength: impl IntoWavelength,
        time: impl IntoTimestamp,
    ) -> Result<Evaluation<Real>> {
        let time = time.into_timestamp()?;
        let series = self.series_for(wavelength)?;
        let launch_value = self.reference_value(&series);
        aia_core::ensure!(
            launch_value > 0.0,
            "launch effective area of channel {} is zero",
            series.wavelength()
        );
        Ok(self
            .evaluate_series(&series, time)?
            .map(|value| value / launch_value))
    }

    /// Effective area at `time` divided by the launch value.
    ///
    /// Diagnostics are logged with `log::warn!`.
    pub fn effective_area_ratio(
        &self,
        wavelength: impl IntoWavelength,
        time: impl IntoTimestamp,
    ) -> Result<Real> {
        Ok(self
            .evaluate_effective_area_ratio(wavelength, time)?
            .into_logged_value())
    }

    fn evaluate_series(
        &self,
        series: &ChannelSeries,
        time: aia_core::Timestamp,
    ) -> Result<Evaluation<Real>> {
        let augmented = self.augmented_series(series)?;
        self.config
            .interpolator()
            .evaluate(augmented.samples(), time)
    }
}
