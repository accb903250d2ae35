//! The curve value type and its construction protocol.

use std::fmt;

use ordinate_core::{Abscissa, Tenor};
use ordinate_math::MathError;

use crate::config::{CurveConfig, SortPolicy};
use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationMethod, Interpolant, InterpolationMethod};
use crate::normalize::normalize;

/// An immutable set of (x, y) samples with an interpolation rule.
///
/// After construction x is strictly increasing and free of duplicates,
/// and there is at least one point. A single-point curve is constant: it
/// evaluates to its only y value everywhere, whatever the log settings.
///
/// Every operation returns a new curve; clones share the evaluable
/// interpolant.
///
/// # Example
///
/// ```rust
/// use ordinate_curves::prelude::*;
///
/// let curve = Curve::from_points(
///     vec![30.0, 3.0, 9.0, 3.0],
///     vec![1.81, 1.01, 1.204, 9.99],
/// )
/// .unwrap();
///
/// assert_eq!(curve.x(), &[3.0, 9.0, 30.0]);
/// assert_eq!(curve.y(), &[1.01, 1.204, 1.81]);
/// assert_eq!(curve.evaluate(1.0).unwrap(), 1.01);
/// ```
#[derive(Clone)]
pub struct Curve {
    x: Vec<f64>,
    y: Vec<f64>,
    /// `None` only for a single-point curve.
    interpolant: Option<Interpolant>,
    config: CurveConfig,
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("method", &self.config.method)
            .field("extrapolation", &self.config.extrapolation)
            .field("logx", &self.config.logx)
            .field("logy", &self.config.logy)
            .finish()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x = {:?}, y = {:?}, logx = {}, logy = {}",
            self.x, self.y, self.config.logx, self.config.logy
        )
    }
}

/// Curves are equal when their points and settings are.
impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.config == other.config
    }
}

impl Curve {
    /// Builds a curve from x and y values.
    ///
    /// With [`SortPolicy::Normalize`] duplicate x values are dropped (the
    /// first occurrence wins) and the points are sorted by x. With two or
    /// more points the interpolation kernel is built over `ln(x)` and/or
    /// `ln(y)` as configured. Non-positive values on a log axis are not
    /// checked up front; they fail inside the kernel.
    ///
    /// # Errors
    ///
    /// - [`CurveError::LengthMismatch`] if `x` and `y` differ in length
    /// - [`CurveError::EmptyResult`] if there are no points
    /// - [`CurveError::Math`] if an x value is not finite or the kernel
    ///   rejects the (transformed) grid
    pub fn new(x: Vec<f64>, y: Vec<f64>, config: CurveConfig) -> CurveResult<Self> {
        if x.len() != y.len() {
            return Err(CurveError::length_mismatch(x.len(), y.len()));
        }
        if x.is_empty() {
            return Err(CurveError::empty_result("curve construction"));
        }
        if let Some(bad) = x.iter().find(|v| !v.is_finite()) {
            let reason = format!("x values must be finite, got {bad}");
            return Err(MathError::invalid_input(reason).into());
        }

        let (x, y) = match config.sort {
            SortPolicy::Normalize => {
                let input_len = x.len();
                let (x, y) = normalize(x, y);
                if x.len() < input_len {
                    tracing::trace!(
                        dropped = input_len - x.len(),
                        "dropped duplicate x values"
                    );
                }
                (x, y)
            }
            SortPolicy::AssumeSorted => (x, y),
        };

        let interpolant = if x.len() == 1 {
            None
        } else {
            let kx = if config.logx {
                x.iter().map(|v| v.ln()).collect()
            } else {
                x.clone()
            };
            let ky = if config.logy {
                y.iter().map(|v| v.ln()).collect()
            } else {
                y.clone()
            };
            Some(Interpolant::new(kx, ky, config.method, config.extrapolation)?)
        };

        tracing::trace!(
            points = x.len(),
            method = %config.method,
            extrapolation = %config.extrapolation,
            logx = config.logx,
            logy = config.logy,
            "constructed curve"
        );

        Ok(Self {
            x,
            y,
            interpolant,
            // The sort policy only governs construction.
            config: config.with_sort(SortPolicy::Normalize),
        })
    }

    /// Builds a curve with default settings.
    pub fn from_points(x: Vec<f64>, y: Vec<f64>) -> CurveResult<Self> {
        Self::new(x, y, CurveConfig::default())
    }

    /// Builds a curve whose x values are tenor day counts shifted by
    /// `offset` calendar days.
    ///
    /// ```rust
    /// use ordinate_curves::prelude::*;
    ///
    /// let curve = Curve::from_tenors(
    ///     &[Tenor::M1, Tenor::M3, Tenor::Y1],
    ///     vec![0.040, 0.042, 0.045],
    ///     2.0,
    ///     CurveConfig::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(curve.x(), &[32.0, 92.0, 367.0]);
    /// ```
    pub fn from_tenors(
        tenors: &[Tenor],
        y: Vec<f64>,
        offset: f64,
        config: CurveConfig,
    ) -> CurveResult<Self> {
        let x = tenors
            .iter()
            .map(|t| t.to_days() as f64 + offset)
            .collect();
        Self::new(x, y, config)
    }

    /// Builds a curve from tenor strings such as `"3M"`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Core`] if any string is not a valid tenor.
    pub fn from_tenor_strs<S: AsRef<str>>(
        tenors: &[S],
        y: Vec<f64>,
        offset: f64,
        config: CurveConfig,
    ) -> CurveResult<Self> {
        let tenors = tenors
            .iter()
            .map(|s| Tenor::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_tenors(&tenors, y, offset, config)
    }

    /// Builds a curve from any x-positions (numbers, tenors, tenor strings).
    pub fn from_abscissae<X: Abscissa>(
        xs: &[X],
        y: Vec<f64>,
        config: CurveConfig,
    ) -> CurveResult<Self> {
        let x = xs
            .iter()
            .map(Abscissa::abscissa)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(x, y, config)
    }

    /// Rebuilds the same points with different settings.
    pub fn with_config(&self, config: CurveConfig) -> CurveResult<Self> {
        Self::new(
            self.x.clone(),
            self.y.clone(),
            config.with_sort(SortPolicy::AssumeSorted),
        )
    }

    /// Rebuilds the same points, starting from this curve's own settings.
    ///
    /// ```rust
    /// use ordinate_curves::prelude::*;
    ///
    /// let curve = Curve::from_points(vec![1.0, 2.0], vec![0.99, 0.97]).unwrap();
    /// let logged = curve.rebuild(|c| c.with_logy(true)).unwrap();
    /// assert!(logged.logy());
    /// assert_eq!(logged.method(), curve.method());
    /// ```
    pub fn rebuild(&self, f: impl FnOnce(CurveConfig) -> CurveConfig) -> CurveResult<Self> {
        self.with_config(f(self.config))
    }

    /// Returns the x values, strictly increasing.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the y values.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterates over the (x, y) points.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: a curve has at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns true for a single-point (constant) curve.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.interpolant.is_none()
    }

    /// Returns the smallest and largest x.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Returns the settings the curve was built with.
    #[must_use]
    pub fn config(&self) -> CurveConfig {
        self.config
    }

    /// Returns the interpolation method.
    #[must_use]
    pub fn method(&self) -> InterpolationMethod {
        self.config.method
    }

    /// Returns the extrapolation method.
    #[must_use]
    pub fn extrapolation(&self) -> ExtrapolationMethod {
        self.config.extrapolation
    }

    /// Returns true if x is interpolated in log space.
    #[must_use]
    pub fn logx(&self) -> bool {
        self.config.logx
    }

    /// Returns true if y is interpolated in log space.
    #[must_use]
    pub fn logy(&self) -> bool {
        self.config.logy
    }

    pub(crate) fn interpolant(&self) -> Option<&Interpolant> {
        self.interpolant.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;

    #[test]
    fn test_normalizes_input() {
        let curve =
            Curve::from_points(vec![9.0, 3.0, 9.0, 1.0], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(curve.x(), &[1.0, 3.0, 9.0]);
        assert_eq!(curve.y(), &[4.0, 2.0, 1.0]);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.domain(), (1.0, 9.0));
    }

    #[test]
    fn test_length_mismatch() {
        let err = Curve::from_points(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err, CurveError::length_mismatch(2, 1));
    }

    #[test]
    fn test_empty_input() {
        let err = Curve::from_points(vec![], vec![]).unwrap_err();
        assert!(matches!(err, CurveError::EmptyResult { .. }));
    }

    #[test]
    fn test_single_point_has_no_interpolant() {
        let curve = Curve::from_points(vec![3.0], vec![5.5]).unwrap();
        assert!(curve.is_degenerate());
        assert!(curve.interpolant().is_none());
    }

    #[test]
    fn test_single_point_ignores_log_domain() {
        let config = CurveConfig::default().with_logx(true).with_logy(true);
        let curve = Curve::new(vec![-3.0], vec![-5.5], config).unwrap();
        assert!(curve.is_degenerate());
    }

    #[test]
    fn test_non_finite_x_rejected_at_any_length() {
        for x in [vec![f64::NAN], vec![f64::INFINITY], vec![f64::NAN, 1.0]] {
            let y = vec![1.0; x.len()];
            assert!(matches!(
                Curve::from_points(x, y),
                Err(CurveError::Math(MathError::InvalidInput { .. }))
            ));
        }
        assert!(Curve::from_points(vec![f64::NEG_INFINITY, 0.0], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_log_axis_needs_positive_values() {
        let config = CurveConfig::default().with_logx(true);
        let err = Curve::new(vec![0.0, 1.0], vec![1.0, 2.0], config).unwrap_err();
        assert!(matches!(err, CurveError::Math(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_assume_sorted_rejects_unsorted() {
        let config = CurveConfig::default().with_sort(SortPolicy::AssumeSorted);
        assert!(Curve::new(vec![2.0, 1.0], vec![1.0, 2.0], config).is_err());
    }

    #[test]
    fn test_stored_config_forgets_sort_policy() {
        let config = CurveConfig::default().with_sort(SortPolicy::AssumeSorted);
        let curve = Curve::new(vec![1.0, 2.0], vec![1.0, 2.0], config).unwrap();
        assert_eq!(curve.config(), CurveConfig::default());
    }

    #[test]
    fn test_tenor_constructors() {
        let curve = Curve::from_tenor_strs(
            &["1Y", "1M", "7d"],
            vec![0.05, 0.03, 0.02],
            0.0,
            CurveConfig::default(),
        )
        .unwrap();
        assert_eq!(curve.x(), &[7.0, 30.0, 365.0]);
        assert_eq!(curve.y(), &[0.02, 0.03, 0.05]);

        let err = Curve::from_tenor_strs(&["1Y", "1Q"], vec![0.05, 0.03], 0.0, CurveConfig::default())
            .unwrap_err();
        assert!(matches!(err, CurveError::Core(_)));
    }

    #[test]
    fn test_from_abscissae() {
        let curve = Curve::from_abscissae(
            &[Tenor::W1, Tenor::M3],
            vec![1.0, 2.0],
            CurveConfig::default(),
        )
        .unwrap();
        assert_eq!(curve.x(), &[7.0, 90.0]);
    }

    #[test]
    fn test_rebuild_keeps_other_settings() {
        let config = CurveConfig::default()
            .with_method(InterpolationMethod::ConstantOnGrid)
            .with_extrapolation(ExtrapolationMethod::Throw);
        let curve = Curve::new(vec![1.0, 2.0], vec![0.9, 0.8], config).unwrap();

        let rebuilt = curve.rebuild(|c| c.with_logx(true)).unwrap();
        assert!(rebuilt.logx());
        assert_eq!(rebuilt.method(), InterpolationMethod::ConstantOnGrid);
        assert_eq!(rebuilt.extrapolation(), ExtrapolationMethod::Throw);
        assert_eq!(rebuilt.x(), curve.x());
    }

    #[test]
    fn test_curve_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Curve>();
    }

    #[test]
    fn test_display() {
        let curve = Curve::from_points(vec![1.0, 2.0], vec![3.0, 4.5]).unwrap();
        assert_eq!(
            curve.to_string(),
            "x = [1.0, 2.0], y = [3.0, 4.5], logx = false, logy = false"
        );
    }

    #[test]
    fn test_equality_ignores_interpolant_identity() {
        let a = Curve::from_points(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        let b = Curve::from_points(vec![2.0, 1.0], vec![4.0, 3.0]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, a.rebuild(|c| c.with_logy(true)).unwrap());
    }
}
