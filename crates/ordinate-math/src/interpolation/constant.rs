//! Piecewise-constant (nearest node) interpolation.

use crate::error::MathResult;
use crate::interpolation::{check_range, find_segment, validate_grid, Interpolator};

/// Piecewise-constant interpolation: the value of the nearest grid node.
///
/// A query exactly halfway between two nodes takes the value of the
/// right-hand node. The derivative is zero everywhere, so a linear
/// extrapolation of a constant kernel stays flat.
///
/// # Example
///
/// ```rust
/// use ordinate_math::interpolation::{ConstantInterpolator, Interpolator};
///
/// let interp = ConstantInterpolator::new(vec![0.0, 10.0], vec![1.0, 2.0]).unwrap();
/// assert_eq!(interp.interpolate(4.0).unwrap(), 1.0);
/// assert_eq!(interp.interpolate(5.0).unwrap(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct ConstantInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl ConstantInterpolator {
    /// Creates a new piecewise-constant interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if the grid is not finite and strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_grid(&xs, &ys, 2)?;
        Ok(Self { xs, ys })
    }
}

impl Interpolator for ConstantInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x)?;

        let i = find_segment(&self.xs, x);
        let mid = 0.5 * (self.xs[i] + self.xs[i + 1]);
        if x < mid {
            Ok(self.ys[i])
        } else {
            Ok(self.ys[i + 1])
        }
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x)?;
        Ok(0.0)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    fn name(&self) -> &'static str {
        "Constant"
    }
}
