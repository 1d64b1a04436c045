//! fh-thermal: 2-D finite-difference heat diffusion over a floor slab.
//!
//! Provides:
//! - `FloorGrid`: double-buffered explicit diffusion grid with pinned heat
//!   sources and lossy wall boundaries
//! - `run_to_steady_state`: convergence-driven runner with a step budget
//! - snapshot/query accessors for external rendering
//!
//! The grid is owned exclusively by its simulator handle; steps mutate the
//! buffers in place and nothing else. A stability (CFL) violation is a
//! warning, not an error: the step still executes.

pub mod error;
pub mod grid;
pub mod sim;

// Re-exports for public API
pub use error::{ThermalError, ThermalResult};
pub use grid::{FloorGrid, HeatSource};
pub use sim::{RunOptions, RunOutcome, Termination, run_to_steady_state};
