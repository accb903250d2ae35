//! Axis selectors for mapping and filtering.

use std::fmt;
use std::str::FromStr;

use crate::error::CurveError;

/// Which coordinates of a curve an operation looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The abscissa.
    X,
    /// The ordinate.
    Y,
    /// Both coordinates together.
    XY,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::XY => "xy",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Axis {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "xy" => Ok(Axis::XY),
            _ => Err(CurveError::invalid_axis(s, "axis selection")),
        }
    }
}
