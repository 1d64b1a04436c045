//! Properties of the heating medium (water near 30-40 °C).

use fh_core::units::{Density, DynVisc};

/// Density in kg/m³
pub const DENSITY_KG_M3: f64 = 998.2;

/// Dynamic viscosity in Pa·s
pub const DYN_VISCOSITY_PA_S: f64 = 0.001002;

/// Specific heat capacity in J/(kg·K)
pub const SPECIFIC_HEAT_J_KG_K: f64 = 4186.0;

#[inline]
pub fn density() -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(DENSITY_KG_M3)
}

#[inline]
pub fn viscosity() -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(DYN_VISCOSITY_PA_S)
}
