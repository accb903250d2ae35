//! # Ordinate Curves
//!
//! Immutable one-dimensional curves that behave like scalars.
//!
//! This crate provides:
//!
//! - **Curve**: Sorted, duplicate-free (x, y) samples with an interpolation
//!   and extrapolation rule, optionally in log space on either axis
//! - **Engine**: Evaluation at numbers, day counts or tenors, and resampling
//! - **Algebra**: `+ - * / ^` between curves and scalars, aligned on the
//!   union of the grids, plus unary functions of y
//! - **Set operations**: Concatenation, filtering and windowing
//!
//! Every operation returns a new [`Curve`]. Operations that compute new
//! values build their result with default settings; operations that only
//! select existing points keep the source settings.
//!
//! ## Quick Start
//!
//! ```rust
//! use ordinate_curves::prelude::*;
//!
//! let curve = Curve::from_tenor_strs(
//!     &["1M", "3M", "1Y", "5Y"],
//!     vec![0.040, 0.042, 0.045, 0.047],
//!     0.0,
//!     CurveConfig::default(),
//! )
//! .unwrap();
//!
//! // 6M sits between the 3M and 1Y pillars
//! let rate = curve.evaluate("6M").unwrap();
//! assert!(rate > 0.042 && rate < 0.045);
//!
//! // Shift by 10bp and add a spread curve on a different grid
//! let spread = Curve::from_points(vec![365.0, 3650.0], vec![0.001, 0.002]).unwrap();
//! let shifted = (&curve + 0.001).unwrap();
//! let total = (&shifted + &spread).unwrap();
//! assert_eq!(total.len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

pub mod algebra;
pub mod axis;
pub mod config;
pub mod curve;
pub mod engine;
pub mod error;
pub mod interpolation;
mod normalize;
pub mod set_ops;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::algebra::{
        add, apply, apply_axis, combine, combine_optional, combine_scalar, combine_with, divide,
        multiply, power, scalar_combine, subtract, transform, BinaryOp, UnaryOp,
    };
    pub use crate::axis::Axis;
    pub use crate::config::{CurveConfig, SortPolicy};
    pub use crate::curve::Curve;
    pub use crate::engine::{resample, resample_to, resample_with};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};
    pub use crate::set_ops::{
        concat, concat_all, drop_duplicates, filter, first, first_point, last, last_point,
    };
    pub use ordinate_core::{Abscissa, Tenor, TenorUnit};
}

pub use axis::Axis;
pub use config::{CurveConfig, SortPolicy};
pub use curve::Curve;
pub use error::{CurveError, CurveResult};
pub use interpolation::{ExtrapolationMethod, Interpolant, InterpolationMethod};
