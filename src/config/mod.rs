//! Settings for the simulated save operation.
//!
//! Settings are plain serde data so the demo can read them from a JSON file.
//! Validation accumulates every bad setting instead of stopping at the first
//! one, so a broken file is reported in full.
//!
//! # Example
//!
//! ```rust
//! use screenflow::config::SimulatedSaveConfig;
//!
//! let config = SimulatedSaveConfig::from_json_str(r#"{ "latency_ms": 250, "seed": 7 }"#).unwrap();
//! assert_eq!(config.latency_ms, 250);
//! assert_eq!(config.success_rate, 0.5);
//! assert_eq!(config.seed, Some(7));
//! ```

mod error;

pub use error::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub const DEFAULT_LATENCY_MS: u64 = 1_000;
pub const DEFAULT_SUCCESS_RATE: f64 = 0.5;
pub const MAX_LATENCY_MS: u64 = 60_000;

/// Behavior of the simulated save.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatedSaveConfig {
    /// Delay before the outcome is delivered
    pub latency_ms: u64,
    /// Probability that a save succeeds, in `[0, 1]`
    pub success_rate: f64,
    /// Seed for a reproducible sequence of outcomes
    pub seed: Option<u64>,
}

impl Default for SimulatedSaveConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            success_rate: DEFAULT_SUCCESS_RATE,
            seed: None,
        }
    }
}

impl SimulatedSaveConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Check every setting, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let rate = if self.success_rate.is_finite() && (0.0..=1.0).contains(&self.success_rate) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::SuccessRateOutOfRange(self.success_rate))
        };

        let latency = if self.latency_ms > MAX_LATENCY_MS {
            Validation::fail(ConfigViolation::LatencyTooLong {
                latency_ms: self.latency_ms,
                max_ms: MAX_LATENCY_MS,
            })
        } else {
            Validation::success(())
        };

        Validation::all_vec(vec![rate, latency]).map(|_| ())
    }

    /// Consume the config, returning it only if every setting is valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
