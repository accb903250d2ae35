//! Grid normalization primitives shared by construction and set operations.

use std::cmp::Ordering;

fn cmp_x(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// `-0.0` and `0.0` are the same grid point.
fn canonical_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

/// Stable sort of the points by x. Points sharing an x keep their input
/// order.
pub(crate) fn sort_points(x: Vec<f64>, y: Vec<f64>) -> (Vec<f64>, Vec<f64>) {
    let mut points: Vec<(f64, f64)> = x.into_iter().map(canonical_zero).zip(y).collect();
    points.sort_by(|a, b| cmp_x(a.0, b.0));
    points.into_iter().unzip()
}

/// Drops every point whose x equals the x of the point before it.
///
/// On x-sorted input this keeps the first occurrence of each x.
pub(crate) fn dedup_sorted(x: Vec<f64>, y: Vec<f64>) -> (Vec<f64>, Vec<f64>) {
    let mut points: Vec<(f64, f64)> = x.into_iter().zip(y).collect();
    points.dedup_by(|later, kept| cmp_x(later.0, kept.0) == Ordering::Equal);
    points.into_iter().unzip()
}

/// Drops duplicate x (first occurrence in input order wins) and sorts
/// ascending by x.
pub(crate) fn normalize(x: Vec<f64>, y: Vec<f64>) -> (Vec<f64>, Vec<f64>) {
    let (x, y) = sort_points(x, y);
    dedup_sorted(x, y)
}
