// hs-core/src/units.rs

use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Read a pressure back in bar, the unit the electrolyser model works in.
#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

/// Read a temperature back in degrees Celsius.
#[inline]
pub fn to_degc(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

pub mod constants {
    /// Universal gas constant, J/(mol·K)
    pub const GAS_CONSTANT: f64 = 8.3144598;
    /// Faraday constant, C/mol
    #[allow(clippy::excessive_precision)]
    pub const FARADAY_CONSTANT: f64 = 96485.3321233100184;
    /// Offset between Celsius and Kelvin scales
    pub const KELVIN_OFFSET: f64 = 273.15;
    /// Standard reference temperature, K
    pub const STANDARD_TEMPERATURE_K: f64 = 298.15;
}
