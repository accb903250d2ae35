//! Evaluation and resampling.
//!
//! Evaluation maps a query through the curve's log settings:
//!
//! ```text
//! value(x) = post(interpolant(pre(x)))
//! pre  = ln  if logx else identity
//! post = exp if logy else identity
//! ```
//!
//! A single-point curve skips both transforms and returns its y.

use ordinate_core::Abscissa;

use crate::config::CurveConfig;
use crate::curve::Curve;
use crate::error::CurveResult;

impl Curve {
    /// Evaluates the curve at a numeric x.
    pub(crate) fn value_at(&self, x: f64) -> CurveResult<f64> {
        let Some(interpolant) = self.interpolant() else {
            return Ok(self.y()[0]);
        };

        let query = if self.logx() { x.ln() } else { x };
        let value = interpolant.value(query)?;
        Ok(if self.logy() { value.exp() } else { value })
    }

    /// Evaluates the curve at every numeric x, in order.
    pub(crate) fn values_at(&self, xs: &[f64]) -> CurveResult<Vec<f64>> {
        xs.iter().map(|&x| self.value_at(x)).collect()
    }

    /// Evaluates the curve at a position.
    ///
    /// The position can be a number, a day count, a [`Tenor`] or a tenor
    /// string; tenors are converted to day counts.
    ///
    /// # Errors
    ///
    /// - [`CurveError::Core`] if a tenor string does not parse
    /// - [`CurveError::Math`] if the query is outside the grid under
    ///   `Throw`, off-grid under `NoInterpolation`, or NaN
    ///
    /// [`Tenor`]: ordinate_core::Tenor
    /// [`CurveError::Core`]: crate::CurveError::Core
    /// [`CurveError::Math`]: crate::CurveError::Math
    pub fn evaluate<X: Abscissa>(&self, x: X) -> CurveResult<f64> {
        self.value_at(x.abscissa()?)
    }

    /// Evaluates the curve at each position.
    ///
    /// ```rust
    /// use ordinate_curves::prelude::*;
    ///
    /// let curve = Curve::from_points(vec![30.0, 90.0], vec![0.01, 0.03]).unwrap();
    /// let values = curve.evaluate_many(&["1M", "2M", "3M"]).unwrap();
    /// assert!((values[1] - 0.02).abs() < 1e-12);
    /// ```
    pub fn evaluate_many<X: Abscissa>(&self, xs: &[X]) -> CurveResult<Vec<f64>> {
        xs.iter().map(|x| self.evaluate(x)).collect()
    }
}

/// Evaluates `curve` on a new grid and builds a curve from the values.
///
/// The result has default settings, whatever `curve` was built with.
pub fn resample(curve: &Curve, xs: &[f64]) -> CurveResult<Curve> {
    resample_with(curve, xs, CurveConfig::default())
}

/// Like [`resample`], with explicit settings for the result.
pub fn resample_with(curve: &Curve, xs: &[f64], config: CurveConfig) -> CurveResult<Curve> {
    tracing::debug!(from = curve.len(), to = xs.len(), "resampling curve");
    let ys = curve.values_at(xs)?;
    Curve::new(xs.to_vec(), ys, config)
}

/// Evaluates `source` on the grid of `target`.
///
/// Equivalent to `resample(source, target.x())`.
pub fn resample_to(target: &Curve, source: &Curve) -> CurveResult<Curve> {
    resample(source, target.x())
}
