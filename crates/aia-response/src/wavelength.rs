//! `Wavelength` — the numeric label of an imaging channel.

use aia_core::errors::{Error, Result};
use aia_core::Real;
use std::cmp::Ordering;

/// Channel identifier, in Ångström (94, 131, 171, 193, 211, 304, 335, 1600,
/// 1700, 4500 for AIA).
///
/// Compared by numeric value: `171` and `171.0` name the same channel.
#[derive(Debug, Clone, Copy)]
pub struct Wavelength(Real);

impl Wavelength {
    /// Create a wavelength label.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` for NaN or infinite values.
    pub fn new(value: Real) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "wavelength must be finite, got {value}"
            )));
        }
        // Fold -0.0 into +0.0 so equality and ordering agree.
        Ok(Self(value + 0.0))
    }

    /// The numeric label.
    pub fn value(&self) -> Real {
        self.0
    }
}

impl PartialEq for Wavelength {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Wavelength {}

impl PartialOrd for Wavelength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Wavelength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for Wavelength {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<u16> for Wavelength {
    fn from(value: u16) -> Self {
        Self(Real::from(value))
    }
}

impl From<u32> for Wavelength {
    fn from(value: u32) -> Self {
        Self(Real::from(value))
    }
}

impl From<i32> for Wavelength {
    fn from(value: i32) -> Self {
        Self(Real::from(value))
    }
}

impl TryFrom<Real> for Wavelength {
    type Error = Error;

    fn try_from(value: Real) -> Result<Self> {
        Self::new(value)
    }
}

/// Anything that names a channel: a [`Wavelength`], an integer label, or a
/// float label such as `171.0`.
pub trait IntoWavelength {
    /// Resolve to a wavelength.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` for NaN or infinite float labels.
    fn into_wavelength(self) -> Result<Wavelength>;
}

impl IntoWavelength for Wavelength {
    fn into_wavelength(self) -> Result<Wavelength> {
        Ok(self)
    }
}

impl IntoWavelength for u16 {
    fn into_wavelength(self) -> Result<Wavelength> {
        Ok(self.into())
    }
}

impl IntoWavelength for u32 {
    fn into_wavelength(self) -> Result<Wavelength> {
        Ok(self.into())
    }
}

impl IntoWavelength for i32 {
    fn into_wavelength(self) -> Result<Wavelength> {
        Ok(self.into())
    }
}

impl IntoWavelength for Real {
    fn into_wavelength(self) -> Result<Wavelength> {
        Wavelength::new(self)
    }
}

impl std::fmt::Display for Wavelength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
