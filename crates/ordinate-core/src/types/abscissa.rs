//! Coercion of x-axis positions to plain numbers.

use crate::error::CoreResult;
use crate::types::Tenor;

/// A value that can stand for a position on a curve's x-axis.
///
/// Numbers are used as-is, integers are read as day counts, and tenors
/// (or tenor strings) are converted through [`Tenor::to_days`]. Every public
/// entry point that takes an x-value coerces it once through this trait
/// before touching the interpolation kernels.
///
/// ```rust
/// use ordinate_core::types::{Abscissa, Tenor};
///
/// assert_eq!(5.5_f64.abscissa().unwrap(), 5.5);
/// assert_eq!(Tenor::M3.abscissa().unwrap(), 90.0);
/// assert_eq!("1y".abscissa().unwrap(), 365.0);
/// assert!("1Q".abscissa().is_err());
/// ```
pub trait Abscissa {
    /// Returns the numeric x-position.
    fn abscissa(&self) -> CoreResult<f64>;
}

impl Abscissa for f64 {
    fn abscissa(&self) -> CoreResult<f64> {
        Ok(*self)
    }
}

impl Abscissa for f32 {
    fn abscissa(&self) -> CoreResult<f64> {
        Ok(f64::from(*self))
    }
}

impl Abscissa for i32 {
    fn abscissa(&self) -> CoreResult<f64> {
        Ok(f64::from(*self))
    }
}

impl Abscissa for i64 {
    fn abscissa(&self) -> CoreResult<f64> {
        Ok(*self as f64)
    }
}

impl Abscissa for Tenor {
    fn abscissa(&self) -> CoreResult<f64> {
        Ok(self.to_days() as f64)
    }
}

impl Abscissa for str {
    fn abscissa(&self) -> CoreResult<f64> {
        Tenor::parse(self)?.abscissa()
    }
}

impl Abscissa for String {
    fn abscissa(&self) -> CoreResult<f64> {
        self.as_str().abscissa()
    }
}

impl<T: Abscissa + ?Sized> Abscissa for &T {
    fn abscissa(&self) -> CoreResult<f64> {
        (**self).abscissa()
    }
}
