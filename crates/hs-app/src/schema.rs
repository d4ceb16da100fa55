//! Wire schemas for requests, error bodies and scenario files.
//!
//! Requests are loosely typed (categories as strings) so that unknown keys
//! reach validation and produce a descriptive error instead of a parse error.

use crate::error::AppError;
use hs_model::SweepAxis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub region: String,
    pub raw_material_cost: f64,
    pub energy_source: String,
    pub production_capacity: f64,
    pub temperature: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReverseRequest {
    pub target_production: f64,
    pub target_efficiency: f64,
    pub target_cost_per_kg: f64,
}

/// Efficiency sweep across one operating variable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SweepRequest {
    pub energy_source: String,
    pub axis: SweepAxis,
    pub start: f64,
    pub end: f64,
    pub points: usize,
    #[serde(default)]
    pub logarithmic: bool,
    /// Held fixed unless it is the swept variable, °C
    pub temperature: f64,
    /// Held fixed unless it is the swept variable, bar
    pub pressure: f64,
}

/// Body returned for a rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedPredict {
    pub name: String,
    #[serde(flatten)]
    pub request: PredictRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedReverse {
    pub name: String,
    #[serde(flatten)]
    pub request: ReverseRequest,
}

/// Batch of named scenarios, loaded from YAML or JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScenarioFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub predict: Vec<NamedPredict>,
    #[serde(default)]
    pub reverse: Vec<NamedReverse>,
}

impl ScenarioFile {
    pub fn len(&self) -> usize {
        self.predict.len() + self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
