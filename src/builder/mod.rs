//! Fluent construction of the simulated save and the screen around it.

use crate::config::{ConfigError, SimulatedSaveConfig};
use crate::effects::{ScreenStateMachine, SimulatedSave};
use std::time::Duration;

/// Builder for [`SimulatedSave`] with a fluent API.
///
/// Unset settings keep the [`SimulatedSaveConfig`] defaults: one second of
/// latency and a 50/50 outcome.
///
/// # Example
///
/// ```rust
/// use screenflow::builder::SimulatedSaveBuilder;
/// use std::time::Duration;
///
/// let save = SimulatedSaveBuilder::new()
///     .latency(Duration::from_millis(200))
///     .success_rate(0.9)
///     .seed(1)
///     .build()
///     .unwrap();
///
/// assert_eq!(save.latency(), Duration::from_millis(200));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulatedSaveBuilder {
    config: SimulatedSaveConfig,
}

impl SimulatedSaveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config, e.g. one loaded from a file.
    pub fn from_config(config: SimulatedSaveConfig) -> Self {
        Self { config }
    }

    /// Delay before each outcome is delivered.
    ///
    /// Sub-millisecond precision is dropped.
    pub fn latency(mut self, latency: Duration) -> Self {
        self.config.latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Probability that a save succeeds.
    pub fn success_rate(mut self, rate: f64) -> Self {
        self.config.success_rate = rate;
        self
    }

    /// Make the outcome sequence reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the save operation.
    /// Returns every invalid setting at once if any are wrong.
    pub fn build(self) -> Result<SimulatedSave, ConfigError> {
        SimulatedSave::from_config(self.config)
    }

    /// Build a screen backed by the simulated save.
    pub fn build_screen(self) -> Result<ScreenStateMachine<SimulatedSave>, ConfigError> {
        Ok(ScreenStateMachine::new(self.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;
    use crate::core::ScreenState;

    #[test]
    fn defaults_build() {
        let save = SimulatedSaveBuilder::new().build().unwrap();
        assert_eq!(save.latency(), Duration::from_secs(1));
        assert_eq!(save.success_rate(), 0.5);
    }

    #[test]
    fn builder_accumulates_violations() {
        let result = SimulatedSaveBuilder::new()
            .latency(Duration::from_secs(600))
            .success_rate(7.0)
            .build();

        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&ConfigViolation::SuccessRateOutOfRange(7.0)));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn from_config_keeps_settings() {
        let config = SimulatedSaveConfig {
            latency_ms: 10,
            success_rate: 1.0,
            seed: Some(5),
        };
        let save = SimulatedSaveBuilder::from_config(config).build().unwrap();
        assert_eq!(save.latency(), Duration::from_millis(10));
        assert_eq!(save.success_rate(), 1.0);
    }

    #[test]
    fn build_screen_starts_editing() {
        let screen = SimulatedSaveBuilder::new().seed(9).build_screen().unwrap();
        assert_eq!(screen.state(), ScreenState::Editing);
    }
}
