//! Electrochemical conversion efficiency of the electrolyser stack.
//!
//! The model starts from a Nernst-style reversible cell potential, adds
//! heuristic system and pressure losses to obtain an operating voltage, and
//! compares that against the thermoneutral voltage. The result is scaled by
//! the energy source factor and finally clamped to a realistic envelope.
//!
//! Temperatures are in °C and pressures in bar throughout.

use crate::source::EnergySource;
use hs_core::numeric::clamp;
use hs_core::units::constants::{
    FARADAY_CONSTANT, GAS_CONSTANT, KELVIN_OFFSET, STANDARD_TEMPERATURE_K,
};
use hs_core::units::{Pressure, Temperature, to_bar, to_degc};

/// Standard reversible potential of water splitting (V)
pub const STANDARD_POTENTIAL: f64 = 1.23;
/// Thermoneutral voltage at standard conditions (V)
pub const THERMONEUTRAL_VOLTAGE: f64 = 1.48;
/// Entropy of water formation, J/(mol·K)
pub const WATER_FORMATION_ENTROPY: f64 = 163.2;
/// Stack temperature with the lowest system losses (°C)
pub const OPTIMAL_TEMPERATURE_C: f64 = 80.0;

/// Lower bound of reported efficiency (%)
pub const EFFICIENCY_MIN: f64 = 40.0;
/// Upper bound of reported efficiency (%)
pub const EFFICIENCY_MAX: f64 = 95.0;

const BASE_SYSTEM_LOSS_V: f64 = 0.3;
const SYSTEM_LOSS_V_PER_C: f64 = 0.002;
const PRESSURE_LOSS_V_PER_DECADE: f64 = 0.05;

/// Intermediate terms of one efficiency evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EfficiencyBreakdown {
    pub temperature_k: f64,
    /// Theoretical cell potential (V)
    pub nernst_potential: f64,
    /// Activation, ohmic and mass-transport losses (V)
    pub system_loss: f64,
    pub pressure_loss: f64,
    pub operating_voltage: f64,
    /// Thermoneutral over operating voltage (%)
    pub voltage_efficiency: f64,
    /// Voltage efficiency scaled by the source factor, before clamping (%)
    pub unclamped_efficiency: f64,
    /// Reported efficiency (%), within [`EFFICIENCY_MIN`, `EFFICIENCY_MAX`]
    pub efficiency: f64,
}

impl EfficiencyBreakdown {
    /// True when the clamp changed the value.
    pub fn is_clamped(&self) -> bool {
        self.efficiency.to_bits() != self.unclamped_efficiency.to_bits()
    }
}

/// Evaluate the efficiency model and keep every intermediate term.
///
/// `pressure` must be positive. Non-positive pressure reaches the logarithms
/// unguarded and the result is NaN.
pub fn breakdown(temperature: f64, pressure: f64, source: EnergySource) -> EfficiencyBreakdown {
    let temperature_k = temperature + KELVIN_OFFSET;

    let nernst_potential = STANDARD_POTENTIAL
        - (GAS_CONSTANT * temperature_k * pressure.ln()) / (4.0 * FARADAY_CONSTANT)
        + (WATER_FORMATION_ENTROPY * (temperature_k - STANDARD_TEMPERATURE_K))
            / (2.0 * FARADAY_CONSTANT);

    let system_loss =
        BASE_SYSTEM_LOSS_V + (temperature - OPTIMAL_TEMPERATURE_C).abs() * SYSTEM_LOSS_V_PER_C;
    let pressure_loss = pressure.log10() * PRESSURE_LOSS_V_PER_DECADE;

    let operating_voltage = nernst_potential + system_loss + pressure_loss;
    let voltage_efficiency = (THERMONEUTRAL_VOLTAGE / operating_voltage) * 100.0;
    let unclamped_efficiency = voltage_efficiency * source.conversion_factor();

    EfficiencyBreakdown {
        temperature_k,
        nernst_potential,
        system_loss,
        pressure_loss,
        operating_voltage,
        voltage_efficiency,
        unclamped_efficiency,
        efficiency: clamp(unclamped_efficiency, EFFICIENCY_MIN, EFFICIENCY_MAX),
    }
}

/// Round-trip conversion efficiency (%) at `temperature` °C and `pressure` bar.
pub fn efficiency(temperature: f64, pressure: f64, source: EnergySource) -> f64 {
    breakdown(temperature, pressure, source).efficiency
}

/// Unit-typed variant of [`efficiency`].
pub fn efficiency_at(temperature: Temperature, pressure: Pressure, source: EnergySource) -> f64 {
    efficiency(to_degc(temperature), to_bar(pressure), source)
}
