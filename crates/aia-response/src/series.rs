//! Per-channel views of the calibration table.
//!
//! A [`ChannelSeries`] holds the measured samples of one channel; an
//! [`AugmentedSeries`] is that series plus a synthetic far-future sample
//! carrying the latest measured value, so that interpolation past the end of
//! the measurements holds flat.

use crate::wavelength::Wavelength;
use aia_core::errors::{Error, Result};
use aia_core::{Real, TimeSeries, Timestamp};
use aia_time::TimeRange;

/// The measured effective-area samples of one channel, ordered by time.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSeries {
    wavelength: Wavelength,
    samples: TimeSeries<Timestamp, Real>,
    reference: (Timestamp, Real),
    latest: (Timestamp, Real),
}

impl ChannelSeries {
    /// Wrap the samples of `wavelength`.
    ///
    /// # Errors
    /// Returns `Error::NoDataForChannel` if `samples` is empty.
    pub fn new(wavelength: Wavelength, samples: TimeSeries<Timestamp, Real>) -> Result<Self> {
        let (reference, latest) = match (samples.first(), samples.last()) {
            (Some((t0, v0)), Some((t1, v1))) => ((*t0, *v0), (*t1, *v1)),
            _ => {
                return Err(Error::NoDataForChannel {
                    wavelength: wavelength.value(),
                })
            }
        };
        Ok(Self {
            wavelength,
            samples,
            reference,
            latest,
        })
    }

    /// The channel.
    pub fn wavelength(&self) -> Wavelength {
        self.wavelength
    }

    /// The samples.
    pub fn samples(&self) -> &TimeSeries<Timestamp, Real> {
        &self.samples
    }

    /// Number of samples (at least one).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The earliest sample: the launch (reference) calibration.
    pub fn reference(&self) -> (Timestamp, Real) {
        self.reference
    }

    /// The effective area at the earliest timestamp.
    pub fn reference_value(&self) -> Real {
        self.reference().1
    }

    /// The latest sample: the current estimate.
    pub fn latest(&self) -> (Timestamp, Real) {
        self.latest
    }

    /// First and last sample times.
    pub fn coverage(&self) -> Result<TimeRange> {
        TimeRange::new(self.reference.0, self.latest.0)
    }

    /// Append the flat-hold sample at `sentinel`.
    ///
    /// Returns a new series; `self` is unchanged.
    ///
    /// # Errors
    /// Returns `Error::Precondition` unless `sentinel` is strictly later than
    /// every measured sample.
    pub fn augmented(&self, sentinel: Timestamp) -> Result<AugmentedSeries> {
        let (last_time, current_estimate) = self.latest;
        aia_core::ensure!(
            sentinel > last_time,
            "flat-hold sentinel {sentinel} must follow the last sample at {last_time} \
             for channel {}",
            self.wavelength
        );
        Ok(AugmentedSeries {
            wavelength: self.wavelength,
            samples: self.samples.with_sample(sentinel, current_estimate),
            last_measured: last_time,
            sentinel,
        })
    }
}

/// A [`ChannelSeries`] extended with one synthetic sample at the flat-hold
/// sentinel, carrying the value of the last measured sample.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSeries {
    wavelength: Wavelength,
    samples: TimeSeries<Timestamp, Real>,
    last_measured: Timestamp,
    sentinel: Timestamp,
}

impl AugmentedSeries {
    /// The channel.
    pub fn wavelength(&self) -> Wavelength {
        self.wavelength
    }

    /// Measured samples followed by the sentinel sample.
    pub fn samples(&self) -> &TimeSeries<Timestamp, Real> {
        &self.samples
    }

    /// Time of the synthetic sample.
    pub fn sentinel(&self) -> Timestamp {
        self.sentinel
    }

    /// Time of the last measured sample.
    pub fn last_measured(&self) -> Timestamp {
        self.last_measured
    }

    /// The value held from the last measurement to the sentinel.
    pub fn held_value(&self) -> Real {
        self.samples[&self.sentinel]
    }
}
