//! Shared application service layer for hydrosim.
//!
//! Sits between frontends and the pure model in `hs-model`: it owns the wire
//! schemas, applies the input validation contract, runs the simulators,
//! evaluates scenario batch files and renders text reports.

pub mod error;
pub mod report;
pub mod scenario;
pub mod schema;
pub mod service;
pub mod validate;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use scenario::{
    ScenarioKind, ScenarioOutcome, ScenarioResult, load_scenarios, run_scenarios, validate_scenarios,
};
pub use schema::{
    ErrorBody, NamedPredict, NamedReverse, PredictRequest, ReverseRequest, ScenarioFile,
    SweepRequest,
};
pub use service::{
    energy_sources, error_json, predict, predict_json, regions, reverse, reverse_json, sweep,
};
pub use validate::{SweepPlan, ValidationError, validate_predict, validate_reverse, validate_sweep};
