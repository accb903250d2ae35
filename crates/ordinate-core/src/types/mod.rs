//! Value types for curve x-axes.
//!
//! - [`Tenor`]: Calendar period with a canonical unit
//! - [`TenorUnit`]: Days, weeks, months or years
//! - [`Abscissa`]: Coercion of numbers, tenors and tenor strings to x-positions

mod abscissa;
mod tenor;

pub use abscissa::Abscissa;
pub use tenor::{Tenor, TenorUnit};
