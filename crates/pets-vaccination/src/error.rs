//! Error types for configuration and the CLI driver.
//!
//! Failing to find a solution is not an error: the solver reports it as
//! `None`. Only bad input and I/O problems end up here.

use thiserror::Error;

/// Rejected problem configuration, raised when a config or state is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must not be negative (got {value})")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("{field} is too large (got {value}, max {})", u32::MAX)]
    CountTooLarge { field: &'static str, value: i64 },

    #[error("unsupported batch size {0}: exactly one of every two vaccinated animals returns to waiting, so the batch size must be 2")]
    UnsupportedBatchSize(i64),

    #[error(
        "population mismatch for {kind}: waiting + recovery holds {actual}, configuration expects {expected}"
    )]
    PopulationMismatch {
        kind: &'static str,
        expected: u32,
        actual: u64,
    },
}

/// Top-level failures surfaced by the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::NegativeCount {
            field: "chihuahuas",
            value: -1,
        };
        assert_eq!(err.to_string(), "chihuahuas must not be negative (got -1)");

        let err = ConfigError::UnsupportedBatchSize(3);
        assert!(err.to_string().starts_with("unsupported batch size 3"));
    }

    #[test]
    fn test_app_error_wraps_config_error() {
        let err: AppError = ConfigError::UnsupportedBatchSize(0).into();
        assert!(matches!(err, AppError::Config(ConfigError::UnsupportedBatchSize(0))));
        assert!(err.to_string().starts_with("Invalid configuration: "));
    }
}
