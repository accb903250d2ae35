//! Curve algebra.
//!
//! Binary operations treat curves like scalars. Two curves on the same grid
//! combine point by point. Otherwise each curve is evaluated on the other's
//! grid and the union is taken:
//!
//! ```text
//! y1' = op(c1.y, c2(c1.x))      on c1.x
//! y2' = op(c1(c2.x), c2.y)      on c2.x
//! result = normalize(c1.x ++ c2.x, y1' ++ y2')
//! ```
//!
//! Where the grids share an x, the value computed on `c1`'s grid is kept.
//!
//! Results use default settings (or the config passed to
//! [`combine_with`]). Nothing is inherited from the operands.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::axis::Axis;
use crate::config::{CurveConfig, SortPolicy};
use crate::curve::Curve;
use crate::error::{CurveError, CurveResult};

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a ^ b`
    Pow,
}

impl BinaryOp {
    /// Applies the operation.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Pow => a.powf(b),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// A unary function applied to y values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Natural exponential.
    Exp,
    /// Natural logarithm.
    Ln,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
}

impl UnaryOp {
    /// Applies the function.
    #[must_use]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            UnaryOp::Exp => v.exp(),
            UnaryOp::Ln => v.ln(),
            UnaryOp::Sin => v.sin(),
            UnaryOp::Cos => v.cos(),
            UnaryOp::Tan => v.tan(),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnaryOp::Exp => "exp",
            UnaryOp::Ln => "ln",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
        };
        write!(f, "{name}")
    }
}

fn zip_with(a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    a.iter().zip(b).map(|(&a, &b)| f(a, b)).collect()
}

/// Builds a curve on an x grid that is already normalized.
fn on_grid(x: Vec<f64>, y: Vec<f64>, config: CurveConfig) -> CurveResult<Curve> {
    Curve::new(x, y, config.with_sort(SortPolicy::AssumeSorted))
}

/// Combines two curves with default settings for the result.
///
/// # Example
///
/// ```rust
/// use ordinate_curves::prelude::*;
///
/// let a = Curve::from_points(vec![1.0, 3.0], vec![1.0, 3.0]).unwrap();
/// let b = Curve::from_points(vec![2.0], vec![10.0]).unwrap();
///
/// let sum = combine(&a, &b, BinaryOp::Add).unwrap();
/// assert_eq!(sum.x(), &[1.0, 2.0, 3.0]);
/// assert_eq!(sum.y(), &[11.0, 12.0, 13.0]);
/// ```
pub fn combine(c1: &Curve, c2: &Curve, op: BinaryOp) -> CurveResult<Curve> {
    combine_with(c1, c2, op, CurveConfig::default())
}

/// Combines two curves, building the result with `config`.
pub fn combine_with(
    c1: &Curve,
    c2: &Curve,
    op: BinaryOp,
    config: CurveConfig,
) -> CurveResult<Curve> {
    if c1.x() == c2.x() {
        tracing::debug!(%op, points = c1.len(), "combining curves on a shared grid");
        let y = zip_with(c1.y(), c2.y(), |a, b| op.apply(a, b));
        return on_grid(c1.x().to_vec(), y, config);
    }

    tracing::debug!(
        %op,
        left = c1.len(),
        right = c2.len(),
        "aligning curves on the union grid"
    );
    let on_c1 = zip_with(c1.y(), &c2.values_at(c1.x())?, |a, b| op.apply(a, b));
    let on_c2 = zip_with(&c1.values_at(c2.x())?, c2.y(), |a, b| op.apply(a, b));

    let x = c1.x().iter().chain(c2.x()).copied().collect();
    let y = on_c1.into_iter().chain(on_c2).collect();
    Curve::new(x, y, config.with_sort(SortPolicy::Normalize))
}

/// Combines two curves when both are present.
///
/// A missing operand yields `Ok(None)` instead of an error.
pub fn combine_optional(
    c1: Option<&Curve>,
    c2: Option<&Curve>,
    op: BinaryOp,
) -> CurveResult<Option<Curve>> {
    match (c1, c2) {
        (Some(c1), Some(c2)) => combine(c1, c2, op).map(Some),
        _ => Ok(None),
    }
}

/// `c1 + c2`
pub fn add(c1: &Curve, c2: &Curve) -> CurveResult<Curve> {
    combine(c1, c2, BinaryOp::Add)
}

/// `c1 - c2`
pub fn subtract(c1: &Curve, c2: &Curve) -> CurveResult<Curve> {
    combine(c1, c2, BinaryOp::Sub)
}

/// `c1 * c2`
pub fn multiply(c1: &Curve, c2: &Curve) -> CurveResult<Curve> {
    combine(c1, c2, BinaryOp::Mul)
}

/// `c1 / c2`
pub fn divide(c1: &Curve, c2: &Curve) -> CurveResult<Curve> {
    combine(c1, c2, BinaryOp::Div)
}

/// `c1 ^ c2`
pub fn power(c1: &Curve, c2: &Curve) -> CurveResult<Curve> {
    combine(c1, c2, BinaryOp::Pow)
}

/// Applies `op(y, k)` to every y value.
pub fn combine_scalar(curve: &Curve, k: f64, op: BinaryOp) -> CurveResult<Curve> {
    let y = curve.y().iter().map(|&v| op.apply(v, k)).collect();
    on_grid(curve.x().to_vec(), y, CurveConfig::default())
}

/// Applies `op(k, y)` to every y value.
pub fn scalar_combine(k: f64, curve: &Curve, op: BinaryOp) -> CurveResult<Curve> {
    let y = curve.y().iter().map(|&v| op.apply(k, v)).collect();
    on_grid(curve.x().to_vec(), y, CurveConfig::default())
}

/// Applies a unary function to every y value.
pub fn transform(curve: &Curve, op: UnaryOp) -> CurveResult<Curve> {
    let y = curve.y().iter().map(|&v| op.apply(v)).collect();
    on_grid(curve.x().to_vec(), y, CurveConfig::default())
}

/// Maps every point to a new y value, keeping x.
pub fn apply(curve: &Curve, f: impl Fn(f64, f64) -> f64) -> CurveResult<Curve> {
    let y = curve.points().map(|(x, y)| f(x, y)).collect();
    on_grid(curve.x().to_vec(), y, CurveConfig::default())
}

/// Maps one axis through `f`.
///
/// Mapping x can reorder or merge points, so the result is normalized
/// again (first occurrence wins).
///
/// # Errors
///
/// Returns [`CurveError::InvalidAxis`] for [`Axis::XY`]; use [`apply`] to
/// map both coordinates.
pub fn apply_axis(curve: &Curve, f: impl Fn(f64) -> f64, axis: Axis) -> CurveResult<Curve> {
    match axis {
        Axis::X => {
            let x = curve.x().iter().map(|&v| f(v)).collect();
            Curve::new(x, curve.y().to_vec(), CurveConfig::default())
        }
        Axis::Y => {
            let y = curve.y().iter().map(|&v| f(v)).collect();
            on_grid(curve.x().to_vec(), y, CurveConfig::default())
        }
        Axis::XY => Err(CurveError::invalid_axis(axis.to_string(), "apply_axis")),
    }
}

impl Curve {
    /// `exp(y)`
    pub fn exp(&self) -> CurveResult<Curve> {
        transform(self, UnaryOp::Exp)
    }

    /// `ln(y)`
    pub fn ln(&self) -> CurveResult<Curve> {
        transform(self, UnaryOp::Ln)
    }

    /// `sin(y)`
    pub fn sin(&self) -> CurveResult<Curve> {
        transform(self, UnaryOp::Sin)
    }

    /// `cos(y)`
    pub fn cos(&self) -> CurveResult<Curve> {
        transform(self, UnaryOp::Cos)
    }

    /// `tan(y)`
    pub fn tan(&self) -> CurveResult<Curve> {
        transform(self, UnaryOp::Tan)
    }

    /// `y ^ k`
    pub fn powf(&self, k: f64) -> CurveResult<Curve> {
        combine_scalar(self, k, BinaryOp::Pow)
    }
}

macro_rules! impl_curve_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<&Curve> for &Curve {
            type Output = CurveResult<Curve>;

            fn $method(self, rhs: &Curve) -> Self::Output {
                combine(self, rhs, $op)
            }
        }

        impl $trait<f64> for &Curve {
            type Output = CurveResult<Curve>;

            fn $method(self, rhs: f64) -> Self::Output {
                combine_scalar(self, rhs, $op)
            }
        }

        impl $trait<&Curve> for f64 {
            type Output = CurveResult<Curve>;

            fn $method(self, rhs: &Curve) -> Self::Output {
                scalar_combine(self, rhs, $op)
            }
        }
    };
}

impl_curve_op!(Add, add, BinaryOp::Add);
impl_curve_op!(Sub, sub, BinaryOp::Sub);
impl_curve_op!(Mul, mul, BinaryOp::Mul);
impl_curve_op!(Div, div, BinaryOp::Div);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::ExtrapolationMethod;
    use approx::assert_relative_eq;

    fn sample() -> Curve {
        Curve::from_points(
            vec![3.0, 9.0, 18.0, 30.0, 91.0],
            vec![1.01, 1.204, 1.54, 1.81, 2.12],
        )
        .unwrap()
    }

    #[test]
    fn test_shared_grid_matches_scalar_doubling() {
        let c = sample();
        let sum = (&c + &c).unwrap();
        let doubled = (2.0 * &c).unwrap();
        assert_eq!(sum.x(), c.x());
        assert_eq!(sum.y(), doubled.y());
    }

    #[test]
    fn test_union_grid() {
        let a = Curve::from_points(vec![0.0, 10.0], vec![0.0, 10.0]).unwrap();
        let b = Curve::from_points(vec![5.0, 20.0], vec![1.0, 1.0]).unwrap();

        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.x(), &[0.0, 5.0, 10.0, 20.0]);
        // a is flat beyond 10, b is flat before 5
        assert_relative_eq!(product.y()[0], 0.0);
        assert_relative_eq!(product.y()[1], 5.0);
        assert_relative_eq!(product.y()[2], 10.0);
        assert_relative_eq!(product.y()[3], 10.0);
    }

    #[test]
    fn test_shared_points_keep_left_grid_value() {
        let a = Curve::from_points(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();
        let b = Curve::from_points(vec![1.0, 3.0], vec![5.0, 5.0]).unwrap();
        let diff = subtract(&a, &b).unwrap();
        assert_eq!(diff.x(), &[0.0, 1.0, 2.0, 3.0]);
        assert_relative_eq!(diff.y()[1], -4.0);
    }

    #[test]
    fn test_result_does_not_inherit_settings() {
        let config = CurveConfig::default()
            .with_logy(true)
            .with_extrapolation(ExtrapolationMethod::Throw);
        let a = Curve::new(vec![1.0, 2.0], vec![1.0, 2.0], config).unwrap();
        let b = Curve::new(vec![1.0, 2.0], vec![3.0, 3.0], config).unwrap();

        let diff = (&a - &b).unwrap();
        assert_eq!(diff.config(), CurveConfig::default());
        assert_eq!(diff.y(), &[-2.0, -1.0]);
        assert_eq!(diff.evaluate(100.0).unwrap(), -1.0);
    }

    #[test]
    fn test_combine_with_config() {
        let a = sample();
        let config = CurveConfig::default().with_extrapolation(ExtrapolationMethod::Throw);
        let ratio = combine_with(&a, &a, BinaryOp::Div, config).unwrap();
        assert_eq!(ratio.extrapolation(), ExtrapolationMethod::Throw);
        assert!(ratio.y().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_operand_errors_propagate() {
        let config = CurveConfig::default().with_extrapolation(ExtrapolationMethod::Throw);
        let a = Curve::new(vec![0.0, 1.0], vec![0.0, 1.0], config).unwrap();
        let b = Curve::from_points(vec![5.0, 6.0], vec![1.0, 1.0]).unwrap();
        assert!(add(&a, &b).is_err());
    }

    #[test]
    fn test_combine_optional() {
        let c = sample();
        assert!(combine_optional(None, Some(&c), BinaryOp::Add).unwrap().is_none());
        assert!(combine_optional(Some(&c), None, BinaryOp::Add).unwrap().is_none());
        let sum = combine_optional(Some(&c), Some(&c), BinaryOp::Add).unwrap().unwrap();
        assert_eq!(sum.len(), c.len());
    }

    #[test]
    fn test_scalar_forms() {
        let c = Curve::from_points(vec![1.0, 2.0], vec![2.0, 4.0]).unwrap();
        assert_eq!((&c - 1.0).unwrap().y(), &[1.0, 3.0]);
        assert_eq!((1.0 - &c).unwrap().y(), &[-1.0, -3.0]);
        assert_eq!((8.0 / &c).unwrap().y(), &[4.0, 2.0]);
        assert_eq!(c.powf(2.0).unwrap().y(), &[4.0, 16.0]);
        assert_eq!(scalar_combine(2.0, &c, BinaryOp::Pow).unwrap().y(), &[4.0, 16.0]);
    }

    #[test]
    fn test_power_of_curves() {
        let base = Curve::from_points(vec![1.0, 2.0], vec![2.0, 3.0]).unwrap();
        let exponent = Curve::from_points(vec![1.0, 2.0], vec![3.0, 2.0]).unwrap();
        let result = power(&base, &exponent).unwrap();
        assert_relative_eq!(result.y()[0], 8.0, epsilon = 1e-12);
        assert_relative_eq!(result.y()[1], 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unary_ops() {
        let c = Curve::from_points(vec![1.0, 2.0], vec![0.0, 1.0]).unwrap();
        assert_relative_eq!(c.exp().unwrap().y()[1], std::f64::consts::E);
        let round_trip = c.exp().unwrap().ln().unwrap();
        assert_relative_eq!(round_trip.y()[1], 1.0, epsilon = 1e-12);
        assert_eq!(c.sin().unwrap().y()[0], 0.0);
        assert_eq!(c.cos().unwrap().y()[0], 1.0);
        assert_eq!(c.tan().unwrap().y()[0], 0.0);
        assert_eq!(UnaryOp::Ln.to_string(), "ln");
    }

    #[test]
    fn test_apply() {
        let c = Curve::from_points(vec![1.0, 2.0], vec![10.0, 20.0]).unwrap();
        let weighted = apply(&c, |x, y| x * y).unwrap();
        assert_eq!(weighted.y(), &[10.0, 40.0]);
    }

    #[test]
    fn test_apply_axis() {
        let c = Curve::from_points(vec![-2.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap();

        let squared = apply_axis(&c, |x| x * x, Axis::X).unwrap();
        assert_eq!(squared.x(), &[1.0, 4.0]);
        assert_eq!(squared.y(), &[2.0, 1.0]);

        let shifted = apply_axis(&c, |y| y + 1.0, Axis::Y).unwrap();
        assert_eq!(shifted.y(), &[2.0, 3.0, 4.0]);

        assert!(matches!(
            apply_axis(&c, |v| v, Axis::XY),
            Err(CurveError::InvalidAxis { .. })
        ));
    }

    #[test]
    fn test_unary_and_apply_results_use_default_settings() {
        let config = CurveConfig::default()
            .with_logy(true)
            .with_extrapolation(ExtrapolationMethod::Throw);
        let c = Curve::new(vec![1.0, 2.0, 3.0], vec![0.5, 0.25, 0.125], config).unwrap();

        let logged = c.ln().unwrap();
        assert_eq!(logged.config(), CurveConfig::default());
        assert_eq!(
            apply(&c, |x, y| x * y).unwrap().config(),
            CurveConfig::default()
        );
        assert_eq!(
            apply_axis(&c, |x| x * 2.0, Axis::X).unwrap().config(),
            CurveConfig::default()
        );
        assert_eq!(
            apply_axis(&c, |y| y * 2.0, Axis::Y).unwrap().config(),
            CurveConfig::default()
        );

        // Negative values outside the grid need a plain y axis and flat ends
        assert!(c.evaluate(10.0).is_err());
        assert_relative_eq!(logged.evaluate(10.0).unwrap(), 0.125_f64.ln());
        assert_relative_eq!(logged.evaluate(0.0).unwrap(), 0.5_f64.ln());
        assert!(logged.evaluate(10.0).unwrap() < 0.0);
    }
}
