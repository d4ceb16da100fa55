//! Scenario batch files.
//!
//! A scenario file lists named predict and reverse requests. Each entry is
//! evaluated on its own; a rejected entry is reported alongside the others
//! instead of aborting the batch.

use crate::error::{AppError, AppResult};
use crate::schema::ScenarioFile;
use crate::service;
use hs_model::{ProductionOutput, ReverseOutput};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Predict,
    Reverse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScenarioResult {
    Production(ProductionOutput),
    Reverse(ReverseOutput),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub kind: ScenarioKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScenarioResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScenarioOutcome {
    fn from_result<T>(
        name: &str,
        kind: ScenarioKind,
        result: AppResult<T>,
        wrap: fn(T) -> ScenarioResult,
    ) -> Self {
        match result {
            Ok(output) => Self {
                name: name.to_string(),
                kind,
                result: Some(wrap(output)),
                error: None,
            },
            Err(err) => Self {
                name: name.to_string(),
                kind,
                result: None,
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Load a scenario file. `.json` files are read as JSON, anything else as YAML.
pub fn load_scenarios(path: &Path) -> AppResult<ScenarioFile> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file: ScenarioFile = if is_json {
        serde_json::from_str(&content)
            .map_err(|e| AppError::Scenario(format!("Failed to parse scenario JSON: {}", e)))?
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Scenario(format!("Failed to parse scenario YAML: {}", e)))?
    };

    validate_scenarios(&file)?;
    tracing::debug!(path = %path.display(), scenarios = file.len(), "scenario file loaded");
    Ok(file)
}

/// Scenario names must be unique across both sections.
pub fn validate_scenarios(file: &ScenarioFile) -> AppResult<()> {
    let mut names = HashSet::new();
    let all_names = file
        .predict
        .iter()
        .map(|s| &s.name)
        .chain(file.reverse.iter().map(|s| &s.name));

    for name in all_names {
        if name.trim().is_empty() {
            return Err(AppError::Scenario("Scenario name must not be empty".to_string()));
        }
        if !names.insert(name) {
            return Err(AppError::Scenario(format!(
                "Duplicate scenario name: {}",
                name
            )));
        }
    }
    Ok(())
}

/// Evaluate every scenario, predict entries first.
pub fn run_scenarios(file: &ScenarioFile) -> Vec<ScenarioOutcome> {
    let predicts = file.predict.iter().map(|s| {
        ScenarioOutcome::from_result(
            &s.name,
            ScenarioKind::Predict,
            service::predict(&s.request),
            ScenarioResult::Production,
        )
    });
    let reverses = file.reverse.iter().map(|s| {
        ScenarioOutcome::from_result(
            &s.name,
            ScenarioKind::Reverse,
            service::reverse(&s.request),
            ScenarioResult::Reverse,
        )
    });

    let outcomes: Vec<ScenarioOutcome> = predicts.chain(reverses).collect();
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        tracing::warn!(failed, total = outcomes.len(), "some scenarios were rejected");
    }
    outcomes
}
