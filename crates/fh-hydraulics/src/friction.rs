//! Reynolds / Swamee-Jain / Darcy-Weisbach pressure-loss chain.

use crate::circuit::HeatingCircuit;
use crate::water;
use fh_core::units::{Pressure, pa};
use std::f64::consts::PI;

/// Absolute roughness of PE-X heating pipe, in meters.
pub const PIPE_ROUGHNESS_M: f64 = 1.5e-6;

/// Pressure loss above which a circuit overloads a standard circulation
/// pump, in mbar.
pub const CRITICAL_LOSS_MBAR: f64 = 300.0;

/// Reynolds number for water flow: ρ·v·D / μ.
pub fn reynolds(velocity_m_s: f64, diameter_m: f64) -> f64 {
    water::DENSITY_KG_M3 * velocity_m_s * diameter_m / water::DYN_VISCOSITY_PA_S
}

/// Swamee-Jain friction factor.
///
/// Valid for turbulent flow (Re above roughly 4000); laminar flow is not
/// special-cased. At Re → 0 the factor degrades to 0, so the loss chain
/// yields 0 instead of NaN.
pub fn friction_factor(reynolds: f64, diameter_m: f64) -> f64 {
    let a = PIPE_ROUGHNESS_M / (3.7 * diameter_m);
    let b = 5.74 / reynolds.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}

/// Darcy-Weisbach pressure loss over the whole circuit.
///
/// The first segment's diameter is representative for the circuit
/// (single-diameter assumption). A circuit with no segments loses nothing.
pub fn pressure_loss(circuit: &HeatingCircuit) -> Pressure {
    let Some(diameter) = circuit.representative_diameter() else {
        return pa(0.0);
    };
    let d = diameter.value;
    let length = circuit.total_length().value;

    // flow_rate carries SI m³/s internally
    let flow = circuit.flow_rate.value;
    let area = PI * d * d / 4.0;
    let velocity = flow / area;

    let re = reynolds(velocity, d);
    let f = friction_factor(re, d);

    // Δp = f · (L/D) · (ρ·v²/2)
    pa(f * (length / d) * (water::DENSITY_KG_M3 * velocity * velocity / 2.0))
}

/// Whether a pressure loss overloads the pump.
pub fn is_critical_loss(loss: Pressure) -> bool {
    use uom::si::pressure::millibar;
    loss.get::<millibar>() > CRITICAL_LOSS_MBAR
}

/// Whether the circuit's own pressure loss overloads the pump.
pub fn is_critical(circuit: &HeatingCircuit) -> bool {
    is_critical_loss(pressure_loss(circuit))
}
