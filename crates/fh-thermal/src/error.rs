//! Error types for grid simulation.

use thiserror::Error;

/// Errors encountered while setting up a grid run.
///
/// Spatial queries and heat-source placement never error: out-of-range
/// coordinates are ignored or defaulted instead.
#[derive(Error, Debug)]
pub enum ThermalError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ThermalResult<T> = Result<T, ThermalError>;
