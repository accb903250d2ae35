//! Linear extrapolation.

use super::Extrapolator;

/// Linear extrapolation - continues with the boundary slope.
///
/// Extends the curve along the tangent at the boundary node. For a linear
/// kernel that is the first (or last) segment carried on; for constant and
/// grid kernels the slope is zero and this behaves like flat extrapolation.
///
/// # Warning
///
/// Linear continuation can cross zero. On a log-scaled axis that is harmless
/// (the extension happens in log space), but on a plain axis a decreasing
/// discount curve eventually goes negative.
///
/// # Example
///
/// ```rust
/// use ordinate_math::extrapolation::{LinearExtrapolator, Extrapolator};
///
/// // Last node: 5% at 10 with slope 0.001
/// let rate = LinearExtrapolator.extrapolate(15.0, 10.0, 0.05, 0.001);
/// assert!((rate - 0.055).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearExtrapolator;

impl LinearExtrapolator {
    /// Creates a new linear extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for LinearExtrapolator {
    fn extrapolate(&self, t: f64, edge_t: f64, edge_value: f64, edge_derivative: f64) -> f64 {
        edge_value + edge_derivative * (t - edge_t)
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_right_edge() {
        let extrap = LinearExtrapolator::new();

        let value = extrap.extrapolate(15.0, 10.0, 0.05, 0.001);
        assert_relative_eq!(value, 0.055, epsilon = 1e-10);

        let value = extrap.extrapolate(20.0, 10.0, 0.05, 0.001);
        assert_relative_eq!(value, 0.06, epsilon = 1e-10);
    }

    #[test]
    fn test_linear_left_edge() {
        // Slope 0.5 at x = 2: one unit to the left drops by 0.5.
        let value = LinearExtrapolator.extrapolate(1.0, 2.0, 3.0, 0.5);
        assert_relative_eq!(value, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_at_boundary() {
        let value = LinearExtrapolator.extrapolate(10.0, 10.0, 0.05, 0.001);
        assert_relative_eq!(value, 0.05, epsilon = 1e-15);
    }

    #[test]
    fn test_linear_name() {
        assert_eq!(LinearExtrapolator.name(), "Linear");
    }
}
