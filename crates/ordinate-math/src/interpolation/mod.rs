//! Interpolation kernels for gridded curve data.
//!
//! Every kernel works on a strictly increasing grid of finite abscissae and
//! refuses to evaluate outside it. Extrapolation is layered on top by the
//! caller using an [`Extrapolator`](crate::extrapolation::Extrapolator).
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: Straight lines between consecutive nodes
//! - [`ConstantInterpolator`]: Value of the nearest node (piecewise constant)
//! - [`GridInterpolator`]: Exact node lookup, no interpolation at all
//!
//! | Method | Continuity | Derivative | Use Case |
//! |--------|------------|------------|----------|
//! | Linear | C0 | Segment slope | Rate and discount curves |
//! | Constant | None | Zero | Step-like fixings |
//! | Grid | None | Zero | Lookup tables |

mod constant;
mod grid;
mod linear;

pub use constant::ConstantInterpolator;
pub use grid::GridInterpolator;
pub use linear::LinearInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
///
/// All kernels implement this trait, providing a unified interface for
/// curve construction. Kernels are immutable once built and can be shared
/// across threads.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    ///
    /// Linear extrapolation continues a curve with the derivative taken at
    /// the boundary node.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    /// Returns the name of the interpolation method.
    fn name(&self) -> &'static str;
}

/// Validates kernel input: matching lengths, enough points, finite and
/// strictly increasing abscissae.
pub(crate) fn validate_grid(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if let Some(i) = xs.iter().position(|x| !x.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "x[{i}] = {} is not finite",
            xs[i]
        )));
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }
    }
    Ok(())
}

/// Rejects points outside `[xs[0], xs[n-1]]`.
pub(crate) fn check_range(xs: &[f64], x: f64) -> MathResult<()> {
    let min = xs[0];
    let max = xs[xs.len() - 1];
    if x < min || x > max || x.is_nan() {
        return Err(MathError::ExtrapolationNotAllowed { x, min, max });
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1].
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
    {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_kernels_through_points() {
        let xs = vec![3.0, 9.0, 18.0, 30.0, 91.0];
        let ys = vec![1.01, 1.204, 1.54, 1.81, 2.12];

        let kernels: Vec<Box<dyn Interpolator>> = vec![
            Box::new(LinearInterpolator::new(xs.clone(), ys.clone()).unwrap()),
            Box::new(ConstantInterpolator::new(xs.clone(), ys.clone()).unwrap()),
            Box::new(GridInterpolator::new(xs.clone(), ys.clone()).unwrap()),
        ];

        for kernel in &kernels {
            for (x, y) in xs.iter().zip(ys.iter()) {
                assert_relative_eq!(kernel.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
            }
            assert_eq!(kernel.min_x(), 3.0);
            assert_eq!(kernel.max_x(), 91.0);
            assert!(kernel.interpolate(1.0).is_err(), "{} extrapolated", kernel.name());
        }
    }

    #[test]
    fn test_validate_grid() {
        assert!(validate_grid(&[0.0, 1.0], &[0.0, 1.0], 2).is_ok());
        assert!(matches!(
            validate_grid(&[0.0], &[0.0], 2),
            Err(MathError::InsufficientData { required: 2, actual: 1 })
        ));
        assert!(validate_grid(&[0.0, 1.0], &[0.0], 2).is_err());
        assert!(validate_grid(&[1.0, 1.0], &[0.0, 1.0], 2).is_err());
        assert!(validate_grid(&[f64::NAN, 1.0], &[0.0, 1.0], 2).is_err());
        assert!(validate_grid(&[f64::NEG_INFINITY, 1.0], &[0.0, 1.0], 2).is_err());
    }

    #[test]
    fn test_find_segment() {
        let xs = [0.0, 1.0, 2.0, 4.0];
        assert_eq!(find_segment(&xs, 0.0), 0);
        assert_eq!(find_segment(&xs, 0.5), 0);
        assert_eq!(find_segment(&xs, 1.0), 1);
        assert_eq!(find_segment(&xs, 3.0), 2);
        assert_eq!(find_segment(&xs, 4.0), 2);
    }
}
