//! Extrapolation methods for gridded curves.
//!
//! Extrapolators extend a kernel beyond either end of its grid, given the
//! nearest boundary node:
//!
//! - [`FlatExtrapolator`]: Boundary value, unchanged
//! - [`LinearExtrapolator`]: Boundary slope continuation
//! - [`FillExtrapolator`]: A fixed fill value
//!
//! Refusing to extrapolate is not an extrapolator: callers simply report
//! the kernel's out-of-range error.
//!
//! # Example
//!
//! ```rust
//! use ordinate_math::extrapolation::{Extrapolator, LinearExtrapolator};
//!
//! // Left of the grid: first node at x = 3 with value 1.01 and slope 0.02.
//! let y = LinearExtrapolator.extrapolate(1.0, 3.0, 1.01, 0.02);
//! assert!((y - 0.97).abs() < 1e-12);
//! ```

mod fill;
mod flat;
mod linear;

pub use fill::FillExtrapolator;
pub use flat::FlatExtrapolator;
pub use linear::LinearExtrapolator;

/// Trait for extrapolation methods.
///
/// The same call serves both ends of a grid: `edge_t` is the first node
/// when `t` lies to the left, the last node when it lies to the right.
pub trait Extrapolator: Send + Sync {
    /// Extrapolates to `t` given the nearest boundary node.
    ///
    /// # Arguments
    ///
    /// * `t` - Target point for extrapolation
    /// * `edge_t` - Abscissa of the boundary node
    /// * `edge_value` - Value at the boundary node
    /// * `edge_derivative` - Kernel derivative at the boundary node
    fn extrapolate(&self, t: f64, edge_t: f64, edge_value: f64, edge_derivative: f64) -> f64;

    /// Returns the name of the extrapolation method.
    fn name(&self) -> &'static str;
}
