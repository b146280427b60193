//! Generation tags for stale-resolution discard.

use super::trigger::SaveOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visit counter for a screen.
///
/// Advanced every time the screen appears. A save scheduled under one epoch
/// delivers its result tagged with that epoch; results carrying an older
/// epoch than the machine's current one are dropped.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct Epoch(u64);

impl Epoch {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The epoch that follows this one. Never wraps; stays at the maximum.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A save outcome tagged with the epoch it was scheduled under.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Resolution {
    pub epoch: Epoch,
    pub outcome: SaveOutcome,
}

impl Resolution {
    pub fn new(epoch: Epoch, outcome: SaveOutcome) -> Self {
        Self { epoch, outcome }
    }

    /// Whether this resolution belongs to `current`.
    pub fn is_current(&self, current: Epoch) -> bool {
        self.epoch == current
    }
}
