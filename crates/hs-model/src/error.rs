//! Model errors.
//!
//! The simulators themselves never fail; these cover parsing category keys
//! and building sweep definitions.

use hs_core::HsError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Region key not in the fixed set.
    #[error("Unknown region: {key}")]
    UnknownRegion { key: String },

    /// Energy source key not in the fixed set.
    #[error("Unknown energy source: {key}")]
    UnknownEnergySource { key: String },

    /// Sweep bounds or point count rejected.
    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },

    #[error(transparent)]
    Core(#[from] HsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::UnknownRegion {
            key: "antarctica".into(),
        };
        assert!(err.to_string().contains("antarctica"));

        let err: ModelError = HsError::NonFinite {
            what: "sweep start",
            value: f64::NAN,
        }
        .into();
        assert!(err.to_string().contains("sweep start"));
    }
}
