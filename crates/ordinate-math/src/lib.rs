//! # Ordinate Math
//!
//! Numeric kernels for the Ordinate curve library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Linear, piecewise-constant and exact-grid kernels
//! - **Extrapolation**: Flat, linear and fill-value extension beyond the grid
//!
//! Kernels know nothing about log-scaled axes, tenors or curve algebra; the
//! `ordinate-curves` crate transforms the data before handing it over and
//! decides when to extrapolate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{
        Extrapolator, FillExtrapolator, FlatExtrapolator, LinearExtrapolator,
    };
    pub use crate::interpolation::{
        ConstantInterpolator, GridInterpolator, Interpolator, LinearInterpolator,
    };
}

pub use error::{MathError, MathResult};
