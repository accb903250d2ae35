//! Flat (constant) extrapolation.

use super::Extrapolator;

/// Flat extrapolation - the boundary value, unchanged.
///
/// Below the grid a curve keeps its first value, above it its last value.
/// This is the default extrapolation for curves.
///
/// # Example
///
/// ```rust
/// use ordinate_math::extrapolation::{FlatExtrapolator, Extrapolator};
///
/// let extrap = FlatExtrapolator;
///
/// // First node: 1.01 at x = 3 with slope 0.03
/// let y = extrap.extrapolate(1.0, 3.0, 1.01, 0.03);
/// assert_eq!(y, 1.01);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatExtrapolator;

impl FlatExtrapolator {
    /// Creates a new flat extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for FlatExtrapolator {
    fn extrapolate(&self, _t: f64, _edge_t: f64, edge_value: f64, _edge_derivative: f64) -> f64 {
        edge_value
    }

    fn name(&self) -> &'static str {
        "Flat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_returns_edge_value() {
        let extrap = FlatExtrapolator::new();

        for t in [31.0, 50.0, 1000.0] {
            let value = extrap.extrapolate(t, 30.0, 1.81, 0.005);
            assert_relative_eq!(value, 1.81, epsilon = 1e-15);
        }
        for t in [2.0, 0.0, -100.0] {
            let value = extrap.extrapolate(t, 3.0, 1.01, 0.005);
            assert_relative_eq!(value, 1.01, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_flat_name() {
        assert_eq!(FlatExtrapolator.name(), "Flat");
    }
}
