//! fh-solver: circuit sizing for a single room.
//!
//! Orchestrates flow-rate sizing, serpentine layout generation, hydraulic
//! validation, and heat-output estimation into one `CircuitSolution`.
//! Material costing is delegated to an opaque `CostModel` collaborator.
//!
//! A solve call is a pure function of its inputs: degenerate geometry
//! yields degenerate but well-defined numbers. The only rejection path is
//! invalid physical input (non-positive dimensions, inverted temperature
//! spread), caught before the kernels run.

pub mod cost;
pub mod error;
pub mod params;
pub mod solve;

pub use cost::{BomItem, CostBreakdown, CostLine, CostModel, Material};
pub use error::{SolveError, SolveResult};
pub use params::CircuitParams;
pub use solve::{
    CircuitSolution, STANDARD_ROOM_TEMP_C, bill_of_materials, estimated_heat_output,
    required_flow_rate, solve,
};
