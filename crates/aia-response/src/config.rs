//! `ResponseConfig` — per-store configuration.

use crate::reader::TableLayout;
use aia_core::{BoundsPolicy, Settings, Timestamp};
use aia_math::TimeInterpolator;
use aia_time::default_flat_hold_horizon;

/// How an [`EffectiveArea`](crate::EffectiveArea) store reads its table and
/// answers queries.
///
/// ```
/// use aia_core::BoundsPolicy;
/// use aia_response::ResponseConfig;
/// use aia_time::parse_timestamp;
///
/// let config = ResponseConfig::default()
///     .with_bounds_policy(BoundsPolicy::Strict)
///     .with_flat_hold_until(parse_timestamp("2060-01-01").unwrap());
/// assert_eq!(config.bounds_policy(), BoundsPolicy::Strict);
/// assert_eq!(config.interpolator().policy(), BoundsPolicy::Strict);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseConfig {
    flat_hold_until: Timestamp,
    bounds_policy: BoundsPolicy,
    layout: TableLayout,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            flat_hold_until: default_flat_hold_horizon(),
            bounds_policy: Settings::instance().bounds_policy(),
            layout: TableLayout::default(),
        }
    }
}

impl ResponseConfig {
    /// Place the flat-hold sentinel at `sentinel`.
    pub fn with_flat_hold_until(mut self, sentinel: Timestamp) -> Self {
        self.flat_hold_until = sentinel;
        self
    }

    /// Use `policy` for query times outside the augmented series.
    pub fn with_bounds_policy(mut self, policy: BoundsPolicy) -> Self {
        self.bounds_policy = policy;
        self
    }

    /// Read tables with `layout`.
    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Time of the flat-hold sentinel.
    pub fn flat_hold_until(&self) -> Timestamp {
        self.flat_hold_until
    }

    /// The bounds policy.
    pub fn bounds_policy(&self) -> BoundsPolicy {
        self.bounds_policy
    }

    /// The table layout.
    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    /// An interpolator honouring this configuration.
    pub fn interpolator(&self) -> TimeInterpolator {
        TimeInterpolator::new(self.bounds_policy)
    }
}
