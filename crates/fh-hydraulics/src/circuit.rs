//! Heating circuit: an ordered pipe run with its operating point.

use fh_core::ids::{CircuitId, RoomId};
use fh_core::units::{Length, TempInterval, Temperature, VolumeRate, kelvin_interval, m};
use uom::si::thermodynamic_temperature::kelvin;
use fh_geometry::PipeSegment;

/// One underfloor-heating circuit.
///
/// Segment order matters: it defines the flow path from the manifold
/// through the room and back. Values are created once per solve call and
/// are read-only afterwards.
#[derive(Clone, Debug)]
pub struct HeatingCircuit {
    pub id: CircuitId,
    pub room: RoomId,
    pub segments: Vec<PipeSegment>,
    pub flow_rate: VolumeRate,
    /// Supply water temperature; must exceed the return temperature
    /// (enforced where circuits are assembled, not here).
    pub supply_temp: Temperature,
    pub return_temp: Temperature,
}

impl HeatingCircuit {
    /// Total centerline length over all segments.
    pub fn total_length(&self) -> Length {
        self.segments
            .iter()
            .fold(m(0.0), |acc, s| acc + s.length())
    }

    /// Spread between supply and return water.
    pub fn delta_t(&self) -> TempInterval {
        // uom 0.36 keeps `TemperatureKind` on `Temperature - Temperature`, so it
        // won't coerce to `TempInterval`; take the difference in kelvin (the same
        // numeric value) and rebuild the interval.
        kelvin_interval(self.supply_temp.get::<kelvin>() - self.return_temp.get::<kelvin>())
    }

    /// Diameter of the first segment, taken as representative for the
    /// whole circuit (circuits are laid with a single pipe size).
    pub fn representative_diameter(&self) -> Option<Length> {
        self.segments.first().map(|s| s.diameter)
    }
}
