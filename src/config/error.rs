//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// A single invalid setting.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Success rate must be between 0 and 1 (got {0})")]
    SuccessRateOutOfRange(f64),

    #[error("Latency ({latency_ms} ms) exceeds the maximum of {max_ms} ms")]
    LatencyTooLong { latency_ms: u64, max_ms: u64 },
}

/// Errors that can occur when loading or building a save configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_violation() {
        let err = ConfigError::Invalid(vec![
            ConfigViolation::SuccessRateOutOfRange(1.5),
            ConfigViolation::LatencyTooLong {
                latency_ms: 90_000,
                max_ms: 60_000,
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid config: Success rate must be between 0 and 1 (got 1.5); \
             Latency (90000 ms) exceeds the maximum of 60000 ms"
        );
    }
}
