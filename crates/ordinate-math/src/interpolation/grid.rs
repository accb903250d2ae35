//! Exact grid lookup.

use std::cmp::Ordering;

use crate::error::{MathError, MathResult};
use crate::interpolation::{check_range, validate_grid, Interpolator};

/// A kernel that does not interpolate: only grid nodes can be evaluated.
///
/// Any point strictly between two nodes is rejected with
/// [`MathError::NotOnGrid`].
#[derive(Debug, Clone)]
pub struct GridInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl GridInterpolator {
    /// Creates a new grid lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if the grid is not finite and strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_grid(&xs, &ys, 2)?;
        Ok(Self { xs, ys })
    }

    fn node(&self, x: f64) -> MathResult<usize> {
        check_range(&self.xs, x)?;
        self.xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Equal))
            .map_err(|_| MathError::NotOnGrid { x })
    }
}

impl Interpolator for GridInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.node(x).map(|i| self.ys[i])
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.node(x).map(|_| 0.0)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    fn name(&self) -> &'static str {
        "None"
    }
}
