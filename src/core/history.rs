//! Transition history for a screen visit.
//!
//! Every accepted trigger is recorded as an immutable [`StateTransition`].
//! Rejected triggers and discarded resolutions never appear here.

use super::epoch::Epoch;
use super::state::State;
use super::trigger::Trigger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use screenflow::core::{Epoch, ScreenState, StateTransition, Trigger};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ScreenState::Editing,
///     to: ScreenState::Pending,
///     trigger: Trigger::Submit,
///     epoch: Epoch::default(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, ScreenState::Pending);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// What caused the transition
    pub trigger: Trigger,
    /// Epoch in effect once the transition was applied
    pub epoch: Epoch,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of accepted transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use screenflow::core::{Epoch, ScreenState, StateHistory, StateTransition, Trigger};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: ScreenState::Editing,
///         to: ScreenState::Pending,
///         trigger: Trigger::Submit,
///         epoch: Epoch::default(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(
///     history.get_path(),
///     vec![&ScreenState::Editing, &ScreenState::Pending]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States traversed: the first `from`, then each `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` if nothing was recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Number of recorded transitions caused by `trigger`.
    pub fn count_of(&self, trigger: &Trigger) -> usize {
        self.transitions
            .iter()
            .filter(|t| &t.trigger == trigger)
            .count()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
