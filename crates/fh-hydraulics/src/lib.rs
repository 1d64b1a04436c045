//! fh-hydraulics: hydraulic analysis of heating circuits.
//!
//! Provides:
//! - water property constants for the heating medium
//! - `HeatingCircuit`: an ordered pipe run with flow rate and water temperatures
//! - the Reynolds / Swamee-Jain / Darcy-Weisbach pressure-loss chain
//! - pump-overload classification against a fixed critical threshold
//!
//! The analysis functions are deterministic and infallible: degenerate
//! inputs (zero flow, empty circuit) degrade to zero loss rather than
//! erroring. Positivity of diameter and spacing is a caller precondition
//! enforced at the solver boundary.

pub mod circuit;
pub mod friction;
pub mod water;

pub use circuit::HeatingCircuit;
pub use friction::{
    CRITICAL_LOSS_MBAR, friction_factor, is_critical, is_critical_loss, pressure_loss, reynolds,
};
