//! hs-core: stable foundation for hydrosim.
//!
//! Contains:
//! - units (uom SI types + constructors + fixed physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{HsError, HsResult};
pub use numeric::*;
pub use units::*;
