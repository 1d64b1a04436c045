//! End-to-end sizing of the demo room.

use fh_core::ids::RoomId;
use fh_core::units::{celsius, m, m2, watts};
use fh_solver::{BomItem, CircuitParams, CostBreakdown, CostLine, CostModel, solve};
use uom::si::pressure::millibar;
use uom::si::volume_rate::liter_per_minute;

/// Fixed unit prices, quoted without discounts.
struct FlatPrices;

impl FlatPrices {
    fn unit_price(material: fh_solver::Material) -> f64 {
        use fh_solver::Material::*;
        match material {
            Pipe => 1.2,
            Insulation => 8.5,
            DistributionPlate => 14.0,
            Manifold => 185.0,
            Thermostat => 45.0,
        }
    }
}

impl CostModel for FlatPrices {
    fn quote(&self, items: &[BomItem], budget_eur: f64) -> CostBreakdown {
        let lines: Vec<CostLine> = items
            .iter()
            .map(|item| {
                let unit_price_eur = Self::unit_price(item.material);
                CostLine {
                    material: item.material,
                    quantity: item.quantity,
                    unit_price_eur,
                    total_eur: unit_price_eur * item.quantity,
                }
            })
            .collect();
        let total_spent_eur: f64 = lines.iter().map(|l| l.total_eur).sum();
        CostBreakdown {
            lines,
            total_spent_eur,
            remaining_budget_eur: budget_eur - total_spent_eur,
        }
    }
}

fn demo_params() -> CircuitParams {
    CircuitParams {
        room_area: m2(13.0),
        room_width: m(3.5),
        room_length: m(3.7),
        pipe_spacing: m(0.125),
        pipe_diameter: m(0.016),
        supply_temp: celsius(35.0),
        return_temp: celsius(30.0),
        heat_demand: watts(1300.0),
    }
}

#[test]
fn demo_room_solution_matches_reference_numbers() {
    let solution = solve(&demo_params(), RoomId::from_index(0), &FlatPrices, 3000.0).unwrap();

    let length = solution.total_length.value;
    assert!((length - 110.7).abs() < 1.0, "length = {length} m");

    let loss = solution.pressure_loss.get::<millibar>();
    assert!((loss - 126.0).abs() < 5.0, "loss = {loss} mbar");
    assert!(!solution.critical);

    let flow = solution.flow_rate.get::<liter_per_minute>() * 60.0;
    assert!((flow - 224.0).abs() < 1.0, "flow = {flow} L/h");

    // 33 W/m at a 35/30 design point
    let output = solution.estimated_output.value;
    assert!((output - length * 33.0).abs() < 1e-6);
}

#[test]
fn demo_room_cost_breakdown_is_embedded() {
    let budget = 3000.0;
    let solution = solve(&demo_params(), RoomId::from_index(0), &FlatPrices, budget).unwrap();

    let cost = &solution.cost;
    assert_eq!(cost.lines.len(), 5);

    let sum: f64 = cost.lines.iter().map(|l| l.total_eur).sum();
    assert!((cost.total_spent_eur - sum).abs() < 1e-9);
    assert!((cost.remaining_budget_eur - (budget - sum)).abs() < 1e-9);

    // pipe line follows the generated length
    let pipe = &cost.lines[0];
    assert_eq!(pipe.material, fh_solver::Material::Pipe);
    assert!((pipe.quantity - solution.total_length.value).abs() < 1e-9);
}

#[test]
fn circuit_carries_the_design_point() {
    let solution = solve(&demo_params(), RoomId::from_index(3), &FlatPrices, 3000.0).unwrap();
    let circuit = &solution.circuit;

    assert_eq!(circuit.room.index(), 3);
    assert!(circuit.supply_temp > circuit.return_temp);
    assert!(!circuit.segments.is_empty());
    // layout and analysis agree on the length
    assert!((circuit.total_length().value - solution.total_length.value).abs() < 1e-12);
}

#[test]
fn invalid_inputs_are_rejected_before_the_kernels() {
    let mut p = demo_params();
    p.pipe_diameter = m(0.0);
    assert!(solve(&p, RoomId::from_index(0), &FlatPrices, 3000.0).is_err());

    let mut p = demo_params();
    p.supply_temp = celsius(28.0);
    assert!(solve(&p, RoomId::from_index(0), &FlatPrices, 3000.0).is_err());
}
