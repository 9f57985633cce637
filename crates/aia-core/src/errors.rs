//! Error types for aia-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Preconditions are
//! checked with the [`ensure!`](crate::ensure) macro and unconditional
//! failures use [`fail!`](crate::fail).

use crate::{Size, Timestamp};
use thiserror::Error;

/// The top-level error type used throughout aia-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The calibration table has no rows for the requested channel.
    #[error("no calibration data for channel {wavelength}")]
    NoDataForChannel {
        /// The wavelength identifier that was requested.
        wavelength: f64,
    },

    /// Interpolation needs at least two samples.
    #[error("need at least 2 samples to interpolate, found {found}")]
    InsufficientSamples {
        /// Number of samples actually available.
        found: Size,
    },

    /// The target time lies outside the sampled range and the strict bounds
    /// policy is in force.
    #[error("target time {target} outside calibrated range [{first}, {last}]")]
    TargetTimeOutOfBounds {
        /// The requested time.
        target: Timestamp,
        /// Earliest sample time.
        first: Timestamp,
        /// Latest sample time.
        last: Timestamp,
    },

    /// Text (a table row or a timestamp) could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Local file access failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand `Result` type used throughout aia-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use aia_core::{ensure, errors::Error};
/// fn positive(x: f64) -> aia_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use aia_core::{fail, errors::Error};
/// fn always_err() -> aia_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("something went wrong".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
