//! Inputs for sizing one circuit.

use crate::error::{SolveError, SolveResult};
use fh_core::units::{Area, Length, Power, Temperature};

/// Room and design-point parameters for a solve call.
#[derive(Clone, Debug)]
pub struct CircuitParams {
    pub room_area: Area,
    pub room_width: Length,
    pub room_length: Length,
    /// Laying spacing (VA) between parallel runs
    pub pipe_spacing: Length,
    pub pipe_diameter: Length,
    pub supply_temp: Temperature,
    pub return_temp: Temperature,
    /// Required heat output of the circuit
    pub heat_demand: Power,
}

impl CircuitParams {
    /// Check the physical preconditions the kernels rely on.
    pub fn validate(&self) -> SolveResult<()> {
        if self.room_area.value <= 0.0 {
            return Err(SolveError::InvalidArg {
                what: "room_area must be positive",
            });
        }
        if self.room_width.value <= 0.0 || self.room_length.value <= 0.0 {
            return Err(SolveError::InvalidArg {
                what: "room dimensions must be positive",
            });
        }
        if self.pipe_spacing.value <= 0.0 {
            return Err(SolveError::InvalidArg {
                what: "pipe_spacing must be positive",
            });
        }
        if self.pipe_diameter.value <= 0.0 {
            return Err(SolveError::InvalidArg {
                what: "pipe_diameter must be positive",
            });
        }
        if self.heat_demand.value < 0.0 {
            return Err(SolveError::InvalidArg {
                what: "heat_demand must be non-negative",
            });
        }
        if self.supply_temp <= self.return_temp {
            return Err(SolveError::InvalidArg {
                what: "supply_temp must exceed return_temp",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fh_core::units::{celsius, m, m2, watts};

    fn demo() -> CircuitParams {
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
    fn demo_params_are_valid() {
        assert!(demo().validate().is_ok());
    }

    #[test]
    fn non_positive_diameter_is_rejected() {
        let mut p = demo();
        p.pipe_diameter = m(0.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn non_positive_spacing_is_rejected() {
        let mut p = demo();
        p.pipe_spacing = m(-0.1);
        assert!(p.validate().is_err());
    }

    #[test]
    fn inverted_temperature_spread_is_rejected() {
        let mut p = demo();
        p.supply_temp = celsius(30.0);
        p.return_temp = celsius(35.0);
        assert!(p.validate().is_err());

        // equal temperatures carry no heat either
        p.supply_temp = celsius(30.0);
        p.return_temp = celsius(30.0);
        assert!(p.validate().is_err());
    }
}
