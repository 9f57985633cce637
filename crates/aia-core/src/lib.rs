//! # aia-core
//!
//! Core types, traits, and error definitions for aia-rs.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace – primitive type aliases, the error hierarchy, the
//! time-indexed series container, the extrapolation policy, and `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// What to do with query times outside the sampled range.
pub mod policy;

/// Process-wide defaults.
pub mod settings;

/// Generic time-series container.
pub mod time_series;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A point in time (UTC, no offset stored).
///
/// The calibration tables carry naive UTC timestamps, so the library works
/// with `NaiveDateTime` directly.
pub type Timestamp = chrono::NaiveDateTime;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use policy::BoundsPolicy;
pub use settings::Settings;
pub use time_series::TimeSeries;
