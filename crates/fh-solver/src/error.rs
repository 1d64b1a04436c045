//! Error types for circuit solving.

use thiserror::Error;

/// Errors raised at the solver boundary.
///
/// The geometry and hydraulic kernels assume positive physical quantities
/// and never error themselves; rejection happens here, before they run.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type SolveResult<T> = Result<T, SolveError>;
