//! Fill-value extrapolation.

use super::Extrapolator;

/// Returns a fixed value anywhere outside the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillExtrapolator {
    value: f64,
}

impl FillExtrapolator {
    /// Creates a fill extrapolator.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Returns the fill value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Extrapolator for FillExtrapolator {
    fn extrapolate(&self, _t: f64, _edge_t: f64, _edge_value: f64, _edge_derivative: f64) -> f64 {
        self.value
    }

    fn name(&self) -> &'static str {
        "Fill"
    }
}
