//! Screen states and the `State` trait they implement.
//!
//! The screen is described by exactly one [`ScreenState`] value at a time.
//! Every flag the presentation layer needs is computed from that value, so
//! contradictory combinations such as "pending and showing an error" cannot
//! be represented at all.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing where a machine
/// currently is; they carry no behavior of their own.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: states are compared by the transition table
/// - `Debug`: states show up in logs and test failures
/// - `Serialize` + `Deserialize`: history can be exported
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name for display and logging.
    fn name(&self) -> &str;

    /// Check if this is a final state for the current screen.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// The single source of truth for what the create-item screen shows.
///
/// # Example
///
/// ```rust
/// use screenflow::core::{ScreenState, State};
///
/// let state = ScreenState::default();
/// assert_eq!(state, ScreenState::Editing);
/// assert!(state.is_editing());
/// assert!(!state.should_show_error_notice());
/// assert_eq!(state.name(), "Editing");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum ScreenState {
    /// Input is editable and the item may be submitted.
    #[default]
    Editing,
    /// A save is in flight; input is frozen.
    Pending,
    /// The save succeeded; the success notice is up.
    Succeeded,
    /// The save failed; the error notice is up.
    Failed,
    /// Success was acknowledged; the screen hands off to the results view.
    Completed,
}

impl ScreenState {
    /// Every state, in declaration order.
    pub const ALL: [ScreenState; 5] = [
        ScreenState::Editing,
        ScreenState::Pending,
        ScreenState::Succeeded,
        ScreenState::Failed,
        ScreenState::Completed,
    ];

    pub fn is_editing(&self) -> bool {
        *self == ScreenState::Editing
    }

    pub fn is_pending(&self) -> bool {
        *self == ScreenState::Pending
    }

    /// True iff the state is `Succeeded`.
    pub fn should_show_success_notice(&self) -> bool {
        *self == ScreenState::Succeeded
    }

    /// True iff the state is `Failed`.
    pub fn should_show_error_notice(&self) -> bool {
        *self == ScreenState::Failed
    }

    /// True iff the state is `Completed`.
    pub fn should_navigate_to_results(&self) -> bool {
        *self == ScreenState::Completed
    }
}

impl State for ScreenState {
    fn name(&self) -> &str {
        match self {
            Self::Editing => "Editing",
            Self::Pending => "Pending",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Completed => "Completed",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Completed)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicates(state: ScreenState) -> [bool; 5] {
        [
            state.is_editing(),
            state.is_pending(),
            state.should_show_success_notice(),
            state.should_show_error_notice(),
            state.should_navigate_to_results(),
        ]
    }

    #[test]
    fn default_state_is_editing() {
        assert_eq!(ScreenState::default(), ScreenState::Editing);
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(ScreenState::Editing.name(), "Editing");
        assert_eq!(ScreenState::Pending.name(), "Pending");
        assert_eq!(ScreenState::Succeeded.name(), "Succeeded");
        assert_eq!(ScreenState::Failed.name(), "Failed");
        assert_eq!(ScreenState::Completed.name(), "Completed");
    }

    #[test]
    fn only_completed_is_final() {
        for state in ScreenState::ALL {
            assert_eq!(state.is_final(), state == ScreenState::Completed);
        }
    }

    #[test]
    fn only_failed_is_error() {
        for state in ScreenState::ALL {
            assert_eq!(state.is_error(), state == ScreenState::Failed);
        }
    }

    #[test]
    fn exactly_one_predicate_holds_per_state() {
        for state in ScreenState::ALL {
            let true_count = predicates(state).iter().filter(|p| **p).count();
            assert_eq!(true_count, 1, "state {state} has {true_count} true predicates");
        }
    }

    #[test]
    fn success_notice_only_in_succeeded() {
        assert!(ScreenState::Succeeded.should_show_success_notice());
        assert_eq!(
            predicates(ScreenState::Succeeded),
            [false, false, true, false, false]
        );
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(ScreenState::Pending.to_string(), "Pending");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = ScreenState::Failed;
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"Failed\"");
        let deserialized: ScreenState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
