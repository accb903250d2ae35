//! # Ordinate Core
//!
//! Value types shared by the Ordinate curve crates.
//!
//! - **Tenor**: Calendar periods (`1D`, `3W`, `6M`, `10Y`) with canonical units
//!   and a fixed day-count approximation
//! - **Abscissa**: One conversion from numbers, tenors and tenor strings to
//!   x-axis positions
//!
//! ## Example
//!
//! ```rust
//! use ordinate_core::prelude::*;
//!
//! let t = Tenor::parse("7D").unwrap();
//! assert_eq!(t, Tenor::W1);
//! assert_eq!(Tenor::from_days(t.to_days()).unwrap(), t);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Abscissa, Tenor, TenorUnit};
}

pub use error::{CoreError, CoreResult};
pub use types::{Abscissa, Tenor, TenorUnit};
