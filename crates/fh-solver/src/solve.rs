//! Circuit sizing orchestration.

use crate::cost::{BomItem, CostModel, Material};
use crate::error::SolveResult;
use crate::params::CircuitParams;
use fh_core::ids::{CircuitId, RoomId};
use fh_core::units::{
    Length, Power, Pressure, TempInterval, Temperature, VolumeRate, kelvin_interval, lph, watts,
};
use fh_hydraulics::{HeatingCircuit, water};
use fh_layout::generate_serpentine;
use uom::si::temperature_interval::kelvin;
use uom::si::thermodynamic_temperature::degree_celsius;

/// Standard room design temperature for the empirical output model, °C.
pub const STANDARD_ROOM_TEMP_C: f64 = 21.0;

/// Complete sizing result for one room.
#[derive(Clone, Debug)]
pub struct CircuitSolution {
    pub circuit: HeatingCircuit,
    pub total_length: Length,
    pub pressure_loss: Pressure,
    /// Pressure loss exceeds what a standard circulation pump can drive
    pub critical: bool,
    /// Output of the laid circuit per the empirical linear model
    pub estimated_output: Power,
    pub flow_rate: VolumeRate,
    pub cost: crate::cost::CostBreakdown,
}

/// Flow rate needed to carry `heat_demand` across the given spread,
/// from Q = ṁ·c_p·ΔT.
///
/// A non-positive spread yields zero flow; callers validate upstream.
pub fn required_flow_rate(heat_demand: Power, spread: TempInterval) -> VolumeRate {
    let dt = spread.get::<kelvin>();
    if dt <= 0.0 {
        return lph(0.0);
    }
    let mass_flow_kg_s = heat_demand.value / (water::SPECIFIC_HEAT_J_KG_K * dt);
    let vol_m3_s = mass_flow_kg_s / water::DENSITY_KG_M3;
    lph(vol_m3_s * 1000.0 * 3600.0)
}

/// Empirical heat output of a laid circuit: 10 + 2·ΔT_avg watts per meter,
/// where ΔT_avg is the mean water temperature over the standard room
/// temperature.
pub fn estimated_heat_output(
    total_length: Length,
    supply_temp: Temperature,
    return_temp: Temperature,
) -> Power {
    let mean_water_c =
        (supply_temp.get::<degree_celsius>() + return_temp.get::<degree_celsius>()) / 2.0;
    let dt_avg = mean_water_c - STANDARD_ROOM_TEMP_C;
    let q_per_meter = 10.0 + 2.0 * dt_avg;
    watts(total_length.value * q_per_meter)
}

/// Material quantities for one circuit: pipe by length, insulation and
/// distribution plates by floor area, one manifold, one thermostat.
pub fn bill_of_materials(params: &CircuitParams, total_length: Length) -> Vec<BomItem> {
    vec![
        BomItem {
            material: Material::Pipe,
            quantity: total_length.value,
        },
        BomItem {
            material: Material::Insulation,
            quantity: params.room_area.value,
        },
        BomItem {
            material: Material::DistributionPlate,
            quantity: params.room_area.value,
        },
        BomItem {
            material: Material::Manifold,
            quantity: 1.0,
        },
        BomItem {
            material: Material::Thermostat,
            quantity: 1.0,
        },
    ]
}

/// Size a circuit for one room.
///
/// Pure function of its inputs; the only failure mode is invalid physical
/// input rejected up front.
pub fn solve(
    params: &CircuitParams,
    room: RoomId,
    cost_model: &dyn CostModel,
    budget_eur: f64,
) -> SolveResult<CircuitSolution> {
    params.validate()?;

    // uom 0.36 won't coerce `Temperature - Temperature` to `TempInterval`; build the
    // spread from the °C difference (numerically equal to the kelvin interval).
    let spread = kelvin_interval(
        params.supply_temp.get::<degree_celsius>() - params.return_temp.get::<degree_celsius>(),
    );
    let flow_rate = required_flow_rate(params.heat_demand, spread);

    let segments = generate_serpentine(
        params.room_width,
        params.room_length,
        params.pipe_spacing,
        params.pipe_diameter,
    );

    let circuit = HeatingCircuit {
        id: CircuitId::from_index(room.index()),
        room,
        segments,
        flow_rate,
        supply_temp: params.supply_temp,
        return_temp: params.return_temp,
    };

    let total_length = circuit.total_length();
    let pressure_loss = fh_hydraulics::pressure_loss(&circuit);
    let critical = fh_hydraulics::is_critical_loss(pressure_loss);
    let estimated_output =
        estimated_heat_output(total_length, params.supply_temp, params.return_temp);

    let cost = cost_model.quote(&bill_of_materials(params, total_length), budget_eur);

    tracing::debug!(
        room = %room,
        length_m = total_length.value,
        segments = circuit.segments.len(),
        critical,
        "sized heating circuit"
    );

    Ok(CircuitSolution {
        circuit,
        total_length,
        pressure_loss,
        critical,
        estimated_output,
        flow_rate,
        cost,
    })
}
