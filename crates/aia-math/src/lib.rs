//! # aia-math
//!
//! Linear interpolation and the time interpolator that evaluates a
//! timestamp-indexed series at an arbitrary instant.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Linear interpolation on a segment.
pub mod interpolations;

/// Interpolation of timestamp-indexed series, with coverage diagnostics.
pub mod time_interpolation;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use interpolations::linear;
pub use time_interpolation::{time_interpolate, Diagnostic, Evaluation, TimeInterpolator};
