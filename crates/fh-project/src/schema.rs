//! Plan schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// A retrofit plan: the rooms to equip, the budget, and the price list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub version: u32,
    pub name: String,
    /// Total project budget in euros
    #[serde(default)]
    pub budget_eur: f64,
    #[serde(default)]
    pub prices: PriceListDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// One room to equip with a heating circuit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomDef {
    pub id: String,
    pub name: String,
    pub area_m2: f64,
    /// Optional; a square room is derived from the area when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_m: Option<f64>,
    pub heat_demand_w: f64,
    #[serde(default = "default_pipe_spacing_m")]
    pub pipe_spacing_m: f64,
    #[serde(default = "default_pipe_diameter_m")]
    pub pipe_diameter_m: f64,
    #[serde(default = "default_supply_temp_c")]
    pub supply_temp_c: f64,
    #[serde(default = "default_return_temp_c")]
    pub return_temp_c: f64,
    /// Design outdoor temperature for the floor simulation
    #[serde(default)]
    pub outside_temp_c: f64,
}

fn default_pipe_spacing_m() -> f64 {
    0.125
}

fn default_pipe_diameter_m() -> f64 {
    0.016
}

fn default_supply_temp_c() -> f64 {
    35.0
}

fn default_return_temp_c() -> f64 {
    30.0
}

/// Unit prices in euros for the materials the solver quantifies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PriceListDef {
    pub pipe_per_m_eur: f64,
    pub insulation_per_m2_eur: f64,
    pub distribution_plate_per_m2_eur: f64,
    pub manifold_eur: f64,
    pub thermostat_eur: f64,
}

impl Default for PriceListDef {
    fn default() -> Self {
        Self {
            pipe_per_m_eur: 1.2,
            insulation_per_m2_eur: 8.5,
            distribution_plate_per_m2_eur: 14.0,
            manifold_eur: 185.0,
            thermostat_eur: 45.0,
        }
    }
}
