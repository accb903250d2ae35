//! Set operations on curve points: deduplication, concatenation, filtering
//! and windowing.
//!
//! Operations that only pick existing points (`drop_duplicates`, `filter`,
//! `first`, `last`) keep the source curve's settings. `concat` merges
//! points from several curves and builds the result with default settings.

use crate::axis::Axis;
use crate::config::{CurveConfig, SortPolicy};
use crate::curve::Curve;
use crate::error::{CurveError, CurveResult};
use crate::normalize::{dedup_sorted, sort_points};

/// Rebuilds a subset of `curve`'s points with its own settings.
fn subset(curve: &Curve, x: Vec<f64>, y: Vec<f64>) -> CurveResult<Curve> {
    Curve::new(x, y, curve.config().with_sort(SortPolicy::AssumeSorted))
}

/// Drops points whose x repeats an earlier point (first occurrence wins).
///
/// Construction already normalizes, so on a built curve this returns an
/// equal curve.
pub fn drop_duplicates(curve: &Curve) -> CurveResult<Curve> {
    let (x, y) = dedup_sorted(curve.x().to_vec(), curve.y().to_vec());
    subset(curve, x, y)
}

/// Concatenates the points of `a` and `b` and sorts them by x.
///
/// With `drop_dup`, an x present in both keeps `a`'s value. Without it
/// a shared x reaches the interpolation kernel, which rejects it.
///
/// # Example
///
/// ```rust
/// use ordinate_curves::prelude::*;
///
/// let a = Curve::from_points(vec![1.0, 3.0], vec![10.0, 30.0]).unwrap();
/// let b = Curve::from_points(vec![2.0, 3.0], vec![20.0, 99.0]).unwrap();
///
/// let merged = concat(&a, &b, true).unwrap();
/// assert_eq!(merged.x(), &[1.0, 2.0, 3.0]);
/// assert_eq!(merged.y(), &[10.0, 20.0, 30.0]);
///
/// assert!(concat(&a, &b, false).is_err());
/// ```
pub fn concat(a: &Curve, b: &Curve, drop_dup: bool) -> CurveResult<Curve> {
    let x: Vec<f64> = a.x().iter().chain(b.x()).copied().collect();
    let y: Vec<f64> = a.y().iter().chain(b.y()).copied().collect();

    let (x, y) = sort_points(x, y);
    let (x, y) = if drop_dup { dedup_sorted(x, y) } else { (x, y) };
    Curve::new(
        x,
        y,
        CurveConfig::default().with_sort(SortPolicy::AssumeSorted),
    )
}

/// Concatenates any number of curves as `concat(c1, concat(c2, ...))`.
///
/// Earlier curves take precedence for shared x values. A single curve is
/// returned as is.
///
/// # Errors
///
/// Returns [`CurveError::EmptyResult`] for an empty slice.
pub fn concat_all(curves: &[Curve], drop_dup: bool) -> CurveResult<Curve> {
    let (last, rest) = curves
        .split_last()
        .ok_or_else(|| CurveError::empty_result("concat_all"))?;

    rest.iter()
        .rev()
        .try_fold(last.clone(), |acc, curve| concat(curve, &acc, drop_dup))
}

/// Keeps the points whose x (or y) satisfies `predicate`.
///
/// # Errors
///
/// - [`CurveError::InvalidAxis`] for [`Axis::XY`]
/// - [`CurveError::EmptyResult`] if no point is kept
pub fn filter(curve: &Curve, axis: Axis, predicate: impl Fn(f64) -> bool) -> CurveResult<Curve> {
    let keep: Vec<bool> = match axis {
        Axis::X => curve.x().iter().map(|&v| predicate(v)).collect(),
        Axis::Y => curve.y().iter().map(|&v| predicate(v)).collect(),
        Axis::XY => return Err(CurveError::invalid_axis(axis.to_string(), "filter")),
    };

    let (x, y): (Vec<f64>, Vec<f64>) = curve
        .points()
        .zip(&keep)
        .filter_map(|(point, &kept)| kept.then_some(point))
        .unzip();
    if x.is_empty() {
        return Err(CurveError::empty_result("filter"));
    }
    subset(curve, x, y)
}

fn check_window(n: usize, operation: &str) -> CurveResult<()> {
    if n == 0 {
        return Err(CurveError::invalid_argument(format!(
            "{operation} needs at least one point, got n = 0"
        )));
    }
    Ok(())
}

/// The first `n` points, or all of them if the curve is shorter.
pub fn first(curve: &Curve, n: usize) -> CurveResult<Curve> {
    check_window(n, "first")?;
    let n = n.min(curve.len());
    subset(curve, curve.x()[..n].to_vec(), curve.y()[..n].to_vec())
}

/// The last `n` points, or all of them if the curve is shorter.
pub fn last(curve: &Curve, n: usize) -> CurveResult<Curve> {
    check_window(n, "last")?;
    let start = curve.len() - n.min(curve.len());
    subset(curve, curve.x()[start..].to_vec(), curve.y()[start..].to_vec())
}

fn point_coordinate(curve: &Curve, index: usize, dims: usize) -> CurveResult<f64> {
    match dims {
        1 => Ok(curve.x()[index]),
        2 => Ok(curve.y()[index]),
        _ => Err(CurveError::InvalidDimension { dims }),
    }
}

/// x (`dims = 1`) or y (`dims = 2`) of the first point.
pub fn first_point(curve: &Curve, dims: usize) -> CurveResult<f64> {
    point_coordinate(curve, 0, dims)
}

/// x (`dims = 1`) or y (`dims = 2`) of the last point.
pub fn last_point(curve: &Curve, dims: usize) -> CurveResult<f64> {
    point_coordinate(curve, curve.len() - 1, dims)
}

impl Curve {
    /// See [`drop_duplicates`].
    pub fn drop_duplicates(&self) -> CurveResult<Curve> {
        drop_duplicates(self)
    }
}
