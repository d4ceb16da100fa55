//! Forward simulation: plant configuration in, production figures out.

use crate::efficiency::{OPTIMAL_TEMPERATURE_C, efficiency};
use crate::region::Region;
use crate::source::EnergySource;

/// Energy cost numerator; divided by efficiency (%) to give cost per kg.
const ENERGY_COST_SCALE: f64 = 50.0;
const RAW_MATERIAL_MARKUP: f64 = 1.5;
const PRESSURE_COST_PER_BAR: f64 = 0.1;
const OFF_OPTIMUM_COST_PER_C: f64 = 0.05;

/// Operating inputs of an electrolysis plant.
///
/// Callers guarantee `raw_material_cost`, `production_capacity` and
/// `pressure` are positive. Temperature is not range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProductionInput {
    pub region: Region,
    /// Cost per unit feedstock
    pub raw_material_cost: f64,
    pub energy_source: EnergySource,
    /// Nameplate capacity, kg/day
    pub production_capacity: f64,
    /// Stack temperature, °C
    pub temperature: f64,
    /// Stack pressure, bar
    pub pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProductionOutput {
    /// kg/day
    pub hydrogen_production: f64,
    /// Percent, within [40, 95]
    pub fuel_cell_efficiency: f64,
    /// Currency per kg H2
    pub cost_per_kg: f64,
    /// kg CO2 per kg H2
    pub co2_emissions: f64,
}

impl ProductionOutput {
    /// True when every figure is a finite number.
    pub fn is_finite(&self) -> bool {
        self.hydrogen_production.is_finite()
            && self.fuel_cell_efficiency.is_finite()
            && self.cost_per_kg.is_finite()
            && self.co2_emissions.is_finite()
    }
}

pub fn simulate_production(input: &ProductionInput) -> ProductionOutput {
    let efficiency = efficiency(input.temperature, input.pressure, input.energy_source);

    let hydrogen_production =
        input.production_capacity * (efficiency / 100.0) * input.region.production_factor();

    let energy_cost = (1.0 / efficiency) * ENERGY_COST_SCALE;
    let cost_per_kg = input.raw_material_cost * RAW_MATERIAL_MARKUP
        + input.pressure * PRESSURE_COST_PER_BAR
        + energy_cost
        + (input.temperature - OPTIMAL_TEMPERATURE_C).abs() * OFF_OPTIMUM_COST_PER_C;

    let co2_emissions = input.energy_source.base_emissions() * (100.0 / efficiency);

    ProductionOutput {
        hydrogen_production,
        fuel_cell_efficiency: efficiency,
        cost_per_kg,
        co2_emissions,
    }
}
