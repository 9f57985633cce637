//! Bounds policy for interpolation queries.

/// How a query time outside `[first, last]` of a series is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundsPolicy {
    /// Linearly extrapolate from the two nearest samples and report a
    /// diagnostic.
    #[default]
    Extrapolate,
    /// Fail with `Error::TargetTimeOutOfBounds`.
    Strict,
}

impl BoundsPolicy {
    /// Return `true` if out-of-range queries are rejected.
    pub fn is_strict(&self) -> bool {
        matches!(self, BoundsPolicy::Strict)
    }
}

impl std::fmt::Display for BoundsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundsPolicy::Extrapolate => write!(f, "Extrapolate"),
            BoundsPolicy::Strict => write!(f, "Strict"),
        }
    }
}
