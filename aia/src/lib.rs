//! # aia
//!
//! Effective-area calibration for the imaging channels of the Atmospheric
//! Imaging Assembly (AIA) on the Solar Dynamics Observatory.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `aia-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! aia = "0.1"
//! ```
//!
//! ```rust
//! use aia::response::{EffectiveArea, ResponseConfig};
//!
//! let table = "\
//! DATE        T_START                  WAVE_STR  WAVELNTH  EFF_AREA
//! 2010-03-24  2010-10-01T00:00:00.000  171_THIN  171       100.0
//! 2010-03-24  2011-01-01T00:00:00.000  171_THIN  171       90.0
//! ";
//! let store = EffectiveArea::from_reader(table.as_bytes(), ResponseConfig::default()).unwrap();
//!
//! // Degradation relative to launch, for correcting an observed image.
//! let ratio = store.effective_area_ratio(171, "2010-11-16T00:00:00").unwrap();
//! assert!((ratio - 0.95).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use aia_core as core;

/// Timestamp parsing, time ranges, and the flat-hold horizon.
pub use aia_time as time;

/// Linear interpolation and time interpolation.
pub use aia_math as math;

/// Response tables, channel series, and effective-area queries.
pub use aia_response as response;

pub use aia_core::{BoundsPolicy, Error, Real, Result, Settings, Timestamp};
pub use aia_response::{EffectiveArea, ResponseConfig, Wavelength};
