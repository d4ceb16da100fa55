//! Simulation operations exposed to frontends.

use crate::error::{AppError, AppResult};
use crate::schema::{ErrorBody, PredictRequest, ReverseRequest, SweepRequest};
use crate::validate::{validate_predict, validate_reverse, validate_sweep};
use hs_model::{
    EnergySource, ProductionOutput, Region, ReverseOutput, SweepResult, run_efficiency_sweep,
    simulate_production, simulate_reverse,
};

/// Validate a production request and run the forward simulator.
pub fn predict(request: &PredictRequest) -> AppResult<ProductionOutput> {
    tracing::debug!(?request, "predict request");
    let input = validate_predict(request)?;
    let output = simulate_production(&input);

    if !output.is_finite() {
        tracing::warn!(?output, "production output carries non-finite values");
    }
    tracing::info!(
        region = %input.region,
        energy_source = %input.energy_source,
        efficiency = output.fuel_cell_efficiency,
        "production simulated"
    );
    Ok(output)
}

/// Validate a target request and run the reverse simulator.
pub fn reverse(request: &ReverseRequest) -> AppResult<ReverseOutput> {
    tracing::debug!(?request, "reverse request");
    let input = validate_reverse(request)?;
    let output = simulate_reverse(&input);

    if !output.is_finite() {
        tracing::warn!(?output, "reverse output carries non-finite values");
    }
    tracing::info!(
        region = %output.recommended_region,
        energy_source = %output.recommended_energy_source,
        required_capacity = output.required_capacity,
        "reverse simulated"
    );
    Ok(output)
}

/// Run an efficiency sweep.
pub fn sweep(request: &SweepRequest) -> AppResult<SweepResult> {
    tracing::debug!(?request, "sweep request");
    let plan = validate_sweep(request)?;
    let result = run_efficiency_sweep(
        &plan.definition,
        plan.temperature,
        plan.pressure,
        plan.source,
    );
    tracing::info!(
        points = result.points.len(),
        clamped = result.clamped_count(),
        "{}",
        plan.definition
    );
    Ok(result)
}

/// JSON in, JSON out variant of [`predict`].
///
/// Non-finite numbers serialize as `null`.
pub fn predict_json(body: &str) -> AppResult<String> {
    let request: PredictRequest =
        serde_json::from_str(body).map_err(|e| AppError::Request(e.to_string()))?;
    let output = predict(&request)?;
    Ok(serde_json::to_string(&output)?)
}

/// JSON in, JSON out variant of [`reverse`].
pub fn reverse_json(body: &str) -> AppResult<String> {
    let request: ReverseRequest =
        serde_json::from_str(body).map_err(|e| AppError::Request(e.to_string()))?;
    let output = reverse(&request)?;
    Ok(serde_json::to_string(&output)?)
}

/// Render an error as `{"error": "..."}`.
pub fn error_json(err: &AppError) -> AppResult<String> {
    Ok(serde_json::to_string(&ErrorBody::from(err))?)
}

/// Region keys accepted by [`predict`].
pub fn regions() -> Vec<&'static str> {
    Region::ALL.iter().map(Region::key).collect()
}

/// Energy source keys accepted by [`predict`].
pub fn energy_sources() -> Vec<&'static str> {
    EnergySource::ALL.iter().map(EnergySource::key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_listing_order() {
        assert_eq!(regions(), vec!["north_america", "europe", "asia_pacific"]);
        assert_eq!(energy_sources(), vec!["solar", "wind", "grid", "hybrid"]);
    }

    #[test]
    fn malformed_json_is_a_client_error() {
        let err = predict_json("{not json").unwrap_err();
        assert!(matches!(err, AppError::Request(_)));
        assert!(err.is_client_error());
    }
}
