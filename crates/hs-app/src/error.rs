//! Error types for the hs-app service layer.

use crate::validate::ValidationError;
use std::path::PathBuf;

/// Application error type shared by every frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed request: {0}")]
    Request(String),

    #[error("Failed to read request file: {path}")]
    RequestFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("{failed} of {total} scenarios rejected")]
    ScenariosRejected { failed: usize, total: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for hs-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True for errors caused by the caller's input rather than the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Request(_) | AppError::ScenariosRejected { .. }
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
