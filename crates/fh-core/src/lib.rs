//! fh-core: stable foundation for floorheat.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - ids (stable compact IDs for rooms, circuits, segments)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FhError, FhResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
