//! Input validation contract.
//!
//! Turns wire requests into typed model inputs. The model assumes these
//! checks have passed and does not repeat them.

use crate::schema::{PredictRequest, ReverseRequest, SweepRequest};
use hs_model::{
    EnergySource, ModelError, ProductionInput, Region, ReverseInput, SweepAxis, SweepDefinition,
    SweepType,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unknown region: '{0}' (expected north_america, europe or asia_pacific)")]
    UnknownRegion(String),

    #[error("Unknown energy source: '{0}' (expected solar, wind, grid or hybrid)")]
    UnknownEnergySource(String),

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error(transparent)]
    Model(ModelError),
}

impl From<ModelError> for ValidationError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownRegion { key } => ValidationError::UnknownRegion(key),
            ModelError::UnknownEnergySource { key } => ValidationError::UnknownEnergySource(key),
            other => ValidationError::Model(other),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    // NaN fails the comparison as well
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be positive",
        })
    }
}

fn number(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be a number",
        })
    } else {
        Ok(value)
    }
}

fn percentage(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be between 0 and 100",
        })
    }
}

pub fn validate_predict(request: &PredictRequest) -> Result<ProductionInput, ValidationError> {
    Ok(ProductionInput {
        region: request.region.parse::<Region>()?,
        raw_material_cost: positive("rawMaterialCost", request.raw_material_cost)?,
        energy_source: request.energy_source.parse::<EnergySource>()?,
        production_capacity: positive("productionCapacity", request.production_capacity)?,
        temperature: number("temperature", request.temperature)?,
        pressure: positive("pressure", request.pressure)?,
    })
}

pub fn validate_reverse(request: &ReverseRequest) -> Result<ReverseInput, ValidationError> {
    Ok(ReverseInput {
        target_production: positive("targetProduction", request.target_production)?,
        target_efficiency: percentage("targetEfficiency", request.target_efficiency)?,
        target_cost_per_kg: positive("targetCostPerKg", request.target_cost_per_kg)?,
    })
}

/// Validated sweep, ready for [`hs_model::run_efficiency_sweep`].
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPlan {
    pub definition: SweepDefinition,
    pub source: EnergySource,
    pub temperature: f64,
    pub pressure: f64,
}

pub fn validate_sweep(request: &SweepRequest) -> Result<SweepPlan, ValidationError> {
    let source = request.energy_source.parse::<EnergySource>()?;
    let temperature = number("temperature", request.temperature)?;
    // The swept variable replaces the fixed one, so only check what is held.
    let pressure = match request.axis {
        SweepAxis::Temperature => positive("pressure", request.pressure)?,
        SweepAxis::Pressure => request.pressure,
    };
    let sweep_type = if request.logarithmic {
        SweepType::Logarithmic
    } else {
        SweepType::Linear
    };
    let definition = SweepDefinition::new(
        request.axis,
        request.start,
        request.end,
        request.points,
        sweep_type,
    )?;

    Ok(SweepPlan {
        definition,
        source,
        temperature,
        pressure,
    })
}
