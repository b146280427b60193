//! The reference save collaborator: a fixed delay and a coin flip.

use crate::config::{ConfigError, SimulatedSaveConfig};
use crate::core::SaveOutcome;
use crate::effects::save::SaveOperation;
use crate::form::Item;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Save operation that waits `latency` and then succeeds with probability
/// `success_rate`.
///
/// Cloning shares the random source, so clones draw from one sequence.
#[derive(Clone, Debug)]
pub struct SimulatedSave {
    latency: Duration,
    success_rate: f64,
    rng: Arc<Mutex<StdRng>>,
}

impl SimulatedSave {
    /// Build from a config, rejecting invalid settings.
    pub fn from_config(config: SimulatedSaveConfig) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            latency: config.latency(),
            success_rate: config.success_rate,
            rng: Arc::new(Mutex::new(rng)),
        })
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    /// Draw the next outcome without waiting.
    pub fn draw(&self) -> SaveOutcome {
        if self.rng.lock().gen_bool(self.success_rate) {
            SaveOutcome::Success
        } else {
            SaveOutcome::Failure
        }
    }
}

impl SaveOperation for SimulatedSave {
    fn save(&self, item: Item) -> impl Future<Output = SaveOutcome> + Send + 'static {
        let this = self.clone();
        async move {
            tokio::time::sleep(this.latency).await;
            let outcome = this.draw();
            debug!(item = %item.name, ?outcome, "simulated save finished");
            outcome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(success_rate: f64, seed: u64) -> SimulatedSave {
        SimulatedSave::from_config(SimulatedSaveConfig {
            latency_ms: 0,
            success_rate,
            seed: Some(seed),
        })
        .unwrap()
    }

    #[test]
    fn certain_rates_are_deterministic() {
        let always = seeded(1.0, 1);
        let never = seeded(0.0, 1);
        for _ in 0..20 {
            assert_eq!(always.draw(), SaveOutcome::Success);
            assert_eq!(never.draw(), SaveOutcome::Failure);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = seeded(0.5, 42);
        let b = seeded(0.5, 42);
        let seq_a: Vec<_> = (0..32).map(|_| a.draw()).collect();
        let seq_b: Vec<_> = (0..32).map(|_| b.draw()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn fair_coin_produces_both_outcomes() {
        let save = seeded(0.5, 7);
        let outcomes: Vec<_> = (0..200).map(|_| save.draw()).collect();
        assert!(outcomes.contains(&SaveOutcome::Success));
        assert!(outcomes.contains(&SaveOutcome::Failure));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = SimulatedSave::from_config(SimulatedSaveConfig {
            success_rate: 2.0,
            ..SimulatedSaveConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn save_waits_for_latency() {
        let save = SimulatedSave::from_config(SimulatedSaveConfig {
            latency_ms: 1_000,
            success_rate: 1.0,
            seed: Some(3),
        })
        .unwrap();

        let started = tokio::time::Instant::now();
        let outcome = save.save(Item::new("Report", "")).await;

        assert_eq!(outcome, SaveOutcome::Success);
        assert!(started.elapsed() >= Duration::from_secs(1));
    }
}
