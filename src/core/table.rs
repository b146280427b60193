//! The transition table.
//!
//! `next_state` is the only place that knows which trigger is accepted in
//! which state. The machine calls it for every intent and resolution and
//! changes state only when it returns `Some`.

use super::state::ScreenState;
use super::trigger::{SaveOutcome, Trigger};

/// Compute the state reached from `current` on `trigger`.
///
/// Returns `None` when the trigger is not accepted in `current`; callers
/// treat that as a no-op.
///
/// # Example
///
/// ```rust
/// use screenflow::core::{next_state, SaveOutcome, ScreenState, Trigger};
///
/// assert_eq!(
///     next_state(&ScreenState::Editing, &Trigger::Submit),
///     Some(ScreenState::Pending)
/// );
/// assert_eq!(
///     next_state(&ScreenState::Pending, &Trigger::Resolved(SaveOutcome::Failure)),
///     Some(ScreenState::Failed)
/// );
/// assert_eq!(next_state(&ScreenState::Pending, &Trigger::Submit), None);
/// ```
pub fn next_state(current: &ScreenState, trigger: &Trigger) -> Option<ScreenState> {
    use ScreenState::*;

    match (current, trigger) {
        (_, Trigger::Appear) => Some(Editing),
        (Editing, Trigger::Submit) => Some(Pending),
        (Failed, Trigger::Retry) => Some(Pending),
        (Pending, Trigger::Resolved(SaveOutcome::Success)) => Some(Succeeded),
        (Pending, Trigger::Resolved(SaveOutcome::Failure)) => Some(Failed),
        (Succeeded, Trigger::AcknowledgeSuccess) => Some(Completed),
        (Failed, Trigger::AcknowledgeErrorAndEdit) => Some(Editing),
        _ => None,
    }
}

/// Check whether `trigger` is accepted in `current` (pure).
pub fn accepts(current: &ScreenState, trigger: &Trigger) -> bool {
    next_state(current, trigger).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TRIGGERS: [Trigger; 7] = [
        Trigger::Appear,
        Trigger::Submit,
        Trigger::Retry,
        Trigger::AcknowledgeSuccess,
        Trigger::AcknowledgeErrorAndEdit,
        Trigger::Resolved(SaveOutcome::Success),
        Trigger::Resolved(SaveOutcome::Failure),
    ];

    #[test]
    fn appear_resets_from_every_state() {
        for state in ScreenState::ALL {
            assert_eq!(
                next_state(&state, &Trigger::Appear),
                Some(ScreenState::Editing)
            );
        }
    }

    #[test]
    fn submit_only_from_editing() {
        for state in ScreenState::ALL {
            assert_eq!(
                accepts(&state, &Trigger::Submit),
                state == ScreenState::Editing
            );
        }
    }

    #[test]
    fn retry_only_from_failed() {
        for state in ScreenState::ALL {
            assert_eq!(
                accepts(&state, &Trigger::Retry),
                state == ScreenState::Failed
            );
        }
    }

    #[test]
    fn resolutions_only_from_pending() {
        for state in ScreenState::ALL {
            for outcome in [SaveOutcome::Success, SaveOutcome::Failure] {
                assert_eq!(
                    accepts(&state, &Trigger::Resolved(outcome)),
                    state == ScreenState::Pending
                );
            }
        }
    }

    #[test]
    fn pending_is_entered_only_by_submit_or_retry() {
        for state in ScreenState::ALL {
            for trigger in ALL_TRIGGERS {
                if next_state(&state, &trigger) == Some(ScreenState::Pending) {
                    assert!(trigger.starts_save(), "{trigger} entered Pending");
                }
            }
        }
    }

    #[test]
    fn pending_is_left_only_by_resolution_or_reset() {
        for trigger in ALL_TRIGGERS {
            if accepts(&ScreenState::Pending, &trigger) {
                assert!(matches!(trigger, Trigger::Resolved(_) | Trigger::Appear));
            }
        }
    }

    #[test]
    fn acknowledgements_follow_notices() {
        assert_eq!(
            next_state(&ScreenState::Succeeded, &Trigger::AcknowledgeSuccess),
            Some(ScreenState::Completed)
        );
        assert_eq!(
            next_state(&ScreenState::Failed, &Trigger::AcknowledgeErrorAndEdit),
            Some(ScreenState::Editing)
        );
        assert!(!accepts(&ScreenState::Failed, &Trigger::AcknowledgeSuccess));
        assert!(!accepts(&ScreenState::Succeeded, &Trigger::AcknowledgeErrorAndEdit));
    }

    #[test]
    fn completed_only_leaves_through_appear() {
        for trigger in ALL_TRIGGERS {
            assert_eq!(
                accepts(&ScreenState::Completed, &trigger),
                trigger == Trigger::Appear
            );
        }
    }
}
