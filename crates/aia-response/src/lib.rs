//! # aia-response
//!
//! Effective-area calibration for the AIA imaging channels: reading response
//! tables, per-channel series with flat-hold augmentation, and the
//! effective-area and degradation-ratio queries.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ResponseConfig` — flat-hold sentinel, bounds policy and table layout.
pub mod config;

/// `EffectiveArea` — the calibration store and its queries.
pub mod effective_area;

/// Reader for the response-table text format.
pub mod reader;

/// `ChannelSeries` and `AugmentedSeries`.
pub mod series;

/// `CalibrationTable` — validated response-table rows.
pub mod table;

/// Selecting the newest `aia_V*_response_table.txt`.
pub mod versions;

/// `Wavelength` — channel labels.
pub mod wavelength;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::ResponseConfig;
pub use effective_area::EffectiveArea;
pub use reader::{read_table, read_table_file, TableLayout, TimeColumn};
pub use series::{AugmentedSeries, ChannelSeries};
pub use table::{CalibrationRecord, CalibrationTable};
pub use versions::{latest_table_in_dir, latest_table_name, table_version};
pub use wavelength::{IntoWavelength, Wavelength};
