//! Piecewise-linear interpolation on a single segment.

use aia_core::Real;
use num_traits::Float;

/// Evaluate the straight line through `(x0, y0)` and `(x1, y1)` at `x`.
///
/// `y0 + (y1 - y0) * (x - x0) / (x1 - x0)`.  Outside `[x0, x1]` the line is
/// extended.  A zero-width segment yields `y0`.
///
/// Abscissae are `f64`; ordinates can be any float type.
///
/// ```
/// use aia_math::interpolations::linear;
///
/// assert_eq!(linear(0.0, 100.0, 92.0, 90.0, 46.0), 95.0);
/// assert_eq!(linear(0.0, 1.0f32, 10.0, 2.0f32, 5.0), 1.5f32);
/// ```
#[inline]
pub fn linear<V: Float>(x0: Real, y0: V, x1: Real, y1: V, x: Real) -> V {
    let dx = x1 - x0;
    if dx == 0.0 {
        return y0;
    }
    let weight = V::from((x - x0) / dx).unwrap_or_else(V::nan);
    y0 + (y1 - y0) * weight
}
