//! fb-core: shared foundation for forcebudget.
//!
//! Contains:
//! - units (uom SI force/ratio types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{FbError, FbResult};
pub use numeric::*;
pub use units::*;
