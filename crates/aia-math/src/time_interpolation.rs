//! Interpolation of timestamp-indexed series.
//!
//! A series is treated as a piecewise-linear function of elapsed time.  The
//! segment used for a target time `t` runs from the last sample at or before
//! `t` to the first sample strictly later than `t`, both found in O(log n);
//! a target that coincides with a sample returns that sample's value
//! unchanged.
//!
//! Targets outside `[first, last]` are governed by a [`BoundsPolicy`]:
//!
//! * `Extrapolate` extends the first (or last) segment and records a
//!   [`Diagnostic`] on the returned [`Evaluation`];
//! * `Strict` fails with `Error::TargetTimeOutOfBounds`.
//!
//! Flat extrapolation past the end of a calibration table is not handled
//! here; callers append a flat-hold sample far in the future first, so the
//! last segment is horizontal.

use crate::interpolations::linear;
use aia_core::errors::{Error, Result};
use aia_core::{BoundsPolicy, Settings, TimeSeries, Timestamp};
use aia_time::{format_timestamp, seconds_between, IntoTimestamp, TimeRange};
use num_traits::Float;

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// A non-fatal condition raised while evaluating a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// The target precedes the first sample; the value is a linear
    /// extrapolation of the first two samples.
    BeforeCoverage {
        /// The requested time.
        target: Timestamp,
        /// The first sample time.
        start: Timestamp,
    },
    /// The target follows the last sample; the value is a linear
    /// extrapolation of the last two samples.
    AfterCoverage {
        /// The requested time.
        target: Timestamp,
        /// The last sample time.
        end: Timestamp,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::BeforeCoverage { target, start } => write!(
                f,
                "query time {} precedes start of calibration coverage ({}); value is extrapolated",
                format_timestamp(target),
                format_timestamp(start)
            ),
            Diagnostic::AfterCoverage { target, end } => write!(
                f,
                "query time {} follows end of calibration coverage ({}); value is extrapolated",
                format_timestamp(target),
                format_timestamp(end)
            ),
        }
    }
}

/// A computed value together with any diagnostics raised on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<V> {
    /// The result.
    pub value: V,
    /// Non-fatal conditions, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
}

impl<V> Evaluation<V> {
    /// Return `true` if nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Transform the value, keeping the diagnostics.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Evaluation<U> {
        Evaluation {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Emit every diagnostic through `log::warn!`.
    pub fn log_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            log::warn!("{diagnostic}");
        }
    }

    /// Log the diagnostics and return the bare value.
    pub fn into_logged_value(self) -> V {
        self.log_diagnostics();
        self.value
    }
}

// ── Interpolator ──────────────────────────────────────────────────────────────

/// Evaluates timestamp-indexed series at arbitrary instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterpolator {
    policy: BoundsPolicy,
}

impl Default for TimeInterpolator {
    /// Uses the process-wide default from [`Settings`].
    fn default() -> Self {
        Self::new(Settings::instance().bounds_policy())
    }
}

impl TimeInterpolator {
    /// Create an interpolator with an explicit bounds policy.
    pub fn new(policy: BoundsPolicy) -> Self {
        Self { policy }
    }

    /// The bounds policy in force.
    pub fn policy(&self) -> BoundsPolicy {
        self.policy
    }

    /// Evaluate `series` at `target`, returning the value and diagnostics.
    ///
    /// # Errors
    /// * `Error::InsufficientSamples` if the series has fewer than 2 samples.
    /// * `Error::TargetTimeOutOfBounds` if the policy is strict and `target`
    ///   lies outside the series.
    pub fn evaluate<V>(
        &self,
        series: &TimeSeries<Timestamp, V>,
        target: Timestamp,
    ) -> Result<Evaluation<V>>
    where
        V: Float + std::fmt::Debug,
    {
        let coverage = match (series.first_key(), series.last_key()) {
            (Some(&first), Some(&last)) if series.len() >= 2 => TimeRange::new(first, last)?,
            _ => {
                return Err(Error::InsufficientSamples {
                    found: series.len(),
                })
            }
        };

        let mut diagnostics = Vec::new();
        if !coverage.contains(target) {
            if self.policy.is_strict() {
                return Err(Error::TargetTimeOutOfBounds {
                    target,
                    first: coverage.start(),
                    last: coverage.end(),
                });
            }
            diagnostics.push(if coverage.precedes(target) {
                Diagnostic::BeforeCoverage {
                    target,
                    start: coverage.start(),
                }
            } else {
                Diagnostic::AfterCoverage {
                    target,
                    end: coverage.end(),
                }
            });
        }

        let value = match series.get(&target) {
            Some(&exact) => exact,
            None => {
                let ((&t0, &v0), (&t1, &v1)) = segment(series, target).ok_or(
                    Error::InsufficientSamples {
                        found: series.len(),
                    },
                )?;
                linear(
                    0.0,
                    v0,
                    seconds_between(t0, t1),
                    v1,
                    seconds_between(t0, target),
                )
            }
        };
        Ok(Evaluation { value, diagnostics })
    }

    /// Evaluate `series` at `target`, logging any diagnostics.
    ///
    /// `target` may be a [`Timestamp`] or a timestamp string.
    pub fn interpolate<V>(
        &self,
        series: &TimeSeries<Timestamp, V>,
        target: impl IntoTimestamp,
    ) -> Result<V>
    where
        V: Float + std::fmt::Debug,
    {
        let target = target.into_timestamp()?;
        Ok(self.evaluate(series, target)?.into_logged_value())
    }
}

/// The pair of samples whose line is evaluated at `target`: the first two
/// before the series, the last two after it, the bracketing pair otherwise.
fn segment<V: Clone>(
    series: &TimeSeries<Timestamp, V>,
    target: Timestamp,
) -> Option<((&Timestamp, &V), (&Timestamp, &V))> {
    let (first, _) = series.first()?;
    let (last, _) = series.last()?;
    if target < *first {
        Some((series.first()?, series.after(first)?))
    } else if target >= *last {
        Some((series.iter().nth_back(1)?, series.last()?))
    } else {
        Some((series.at_or_before(&target)?, series.after(&target)?))
    }
}

/// Linearly interpolate `series` at `target`.
///
/// Uses the default bounds policy from [`Settings`] (extrapolate with a
/// logged warning unless overridden).
///
/// # Example
/// ```
/// use aia_core::TimeSeries;
/// use aia_math::time_interpolate;
/// use aia_time::parse_timestamp;
///
/// let series = TimeSeries::from_pairs(vec![
///     (parse_timestamp("2010-10-01").unwrap(), 100.0),
///     (parse_timestamp("2011-01-01").unwrap(), 90.0),
/// ]);
/// let v: f64 = time_interpolate(&series, "2010-11-16").unwrap();
/// assert!((v - 95.0).abs() < 1e-9);
/// ```
pub fn time_interpolate<V>(series: &TimeSeries<Timestamp, V>, target: impl IntoTimestamp) -> Result<V>
where
    V: Float + std::fmt::Debug,
{
    TimeInterpolator::default().interpolate(series, target)
}
