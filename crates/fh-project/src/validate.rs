//! Plan validation logic.

use crate::schema::{LATEST_VERSION, Plan, PriceListDef, RoomDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_plan(plan: &Plan) -> Result<(), ValidationError> {
    if plan.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: plan.version,
        });
    }

    require_non_negative("budget_eur", plan.budget_eur)?;
    validate_prices(&plan.prices)?;

    let mut room_ids = HashSet::new();
    for room in &plan.rooms {
        if !room_ids.insert(&room.id) {
            return Err(ValidationError::DuplicateId {
                id: room.id.clone(),
                context: "rooms".to_string(),
            });
        }
        validate_room(room)?;
    }

    Ok(())
}

fn validate_room(room: &RoomDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("rooms[{}].{}", room.id, name);

    require_positive(&field("area_m2"), room.area_m2)?;
    if let Some(width) = room.width_m {
        require_positive(&field("width_m"), width)?;
    }
    if let Some(length) = room.length_m {
        require_positive(&field("length_m"), length)?;
    }
    require_non_negative(&field("heat_demand_w"), room.heat_demand_w)?;
    require_positive(&field("pipe_spacing_m"), room.pipe_spacing_m)?;
    require_positive(&field("pipe_diameter_m"), room.pipe_diameter_m)?;

    if room.supply_temp_c <= room.return_temp_c {
        return Err(ValidationError::InvalidValue {
            field: field("supply_temp_c"),
            value: room.supply_temp_c.to_string(),
            reason: "supply must exceed return temperature".to_string(),
        });
    }

    Ok(())
}

fn validate_prices(prices: &PriceListDef) -> Result<(), ValidationError> {
    require_non_negative("prices.pipe_per_m_eur", prices.pipe_per_m_eur)?;
    require_non_negative("prices.insulation_per_m2_eur", prices.insulation_per_m2_eur)?;
    require_non_negative(
        "prices.distribution_plate_per_m2_eur",
        prices.distribution_plate_per_m2_eur,
    )?;
    require_non_negative("prices.manifold_eur", prices.manifold_eur)?;
    require_non_negative("prices.thermostat_eur", prices.thermostat_eur)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            name: id.to_string(),
            area_m2: 13.0,
            width_m: Some(3.5),
            length_m: Some(3.7),
            heat_demand_w: 1300.0,
            pipe_spacing_m: 0.125,
            pipe_diameter_m: 0.016,
            supply_temp_c: 35.0,
            return_temp_c: 30.0,
            outside_temp_c: 0.0,
        }
    }

    fn plan(rooms: Vec<RoomDef>) -> Plan {
        Plan {
            version: LATEST_VERSION,
            name: "test".to_string(),
            budget_eur: 3000.0,
            prices: PriceListDef::default(),
            rooms,
        }
    }

    #[test]
    fn valid_plan_passes() {
        assert!(validate_plan(&plan(vec![room("a"), room("b")])).is_ok());
    }

    #[test]
    fn duplicate_room_ids_are_rejected() {
        let err = validate_plan(&plan(vec![room("a"), room("a")])).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateId { .. }));
    }

    #[test]
    fn future_version_is_rejected() {
        let mut p = plan(vec![]);
        p.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_plan(&p),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn non_positive_quantities_are_rejected() {
        let mut bad = room("a");
        bad.pipe_diameter_m = 0.0;
        assert!(validate_plan(&plan(vec![bad])).is_err());

        let mut bad = room("b");
        bad.area_m2 = -5.0;
        assert!(validate_plan(&plan(vec![bad])).is_err());
    }

    #[test]
    fn inverted_spread_is_rejected() {
        let mut bad = room("a");
        bad.supply_temp_c = 28.0;
        let err = validate_plan(&plan(vec![bad])).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }
}
