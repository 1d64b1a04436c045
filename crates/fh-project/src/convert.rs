//! Conversion from plan records to solver inputs.

use crate::schema::RoomDef;
use fh_core::units::{celsius, m, m2, watts};
use fh_solver::CircuitParams;

/// Solver parameters for one room.
///
/// Rooms without explicit dimensions are treated as square, with both
/// sides derived from the area.
pub fn room_params(room: &RoomDef) -> CircuitParams {
    let side = room.area_m2.max(0.0).sqrt();
    let width = room.width_m.unwrap_or(side);
    let length = room.length_m.unwrap_or(side);

    CircuitParams {
        room_area: m2(room.area_m2),
        room_width: m(width),
        room_length: m(length),
        pipe_spacing: m(room.pipe_spacing_m),
        pipe_diameter: m(room.pipe_diameter_m),
        supply_temp: celsius(room.supply_temp_c),
        return_temp: celsius(room.return_temp_c),
        heat_demand: watts(room.heat_demand_w),
    }
}
