//! Inputs to the screen state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome delivered by a save operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SaveOutcome {
    Success,
    Failure,
}

impl SaveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Anything that can move the screen from one state to another.
///
/// User intents and the asynchronous save resolution share one type so the
/// transition table can be a single pure function.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Trigger {
    /// The screen was shown (or re-shown).
    Appear,
    /// The user submitted the form.
    Submit,
    /// The user asked to retry after a failure.
    Retry,
    /// The user dismissed the success notice.
    AcknowledgeSuccess,
    /// The user dismissed the error notice to keep editing.
    AcknowledgeErrorAndEdit,
    /// A pending save finished.
    Resolved(SaveOutcome),
}

impl Trigger {
    /// Triggers that start a save when accepted.
    pub fn starts_save(&self) -> bool {
        matches!(self, Self::Submit | Self::Retry)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Appear => f.write_str("appear"),
            Self::Submit => f.write_str("submit"),
            Self::Retry => f.write_str("retry"),
            Self::AcknowledgeSuccess => f.write_str("acknowledge-success"),
            Self::AcknowledgeErrorAndEdit => f.write_str("acknowledge-error-and-edit"),
            Self::Resolved(SaveOutcome::Success) => f.write_str("resolved(success)"),
            Self::Resolved(SaveOutcome::Failure) => f.write_str("resolved(failure)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_submit_and_retry_start_saves() {
        assert!(Trigger::Submit.starts_save());
        assert!(Trigger::Retry.starts_save());
        assert!(!Trigger::Appear.starts_save());
        assert!(!Trigger::AcknowledgeSuccess.starts_save());
        assert!(!Trigger::AcknowledgeErrorAndEdit.starts_save());
        assert!(!Trigger::Resolved(SaveOutcome::Success).starts_save());
    }

    #[test]
    fn outcome_success_flag() {
        assert!(SaveOutcome::Success.is_success());
        assert!(!SaveOutcome::Failure.is_success());
    }

    #[test]
    fn trigger_display_is_kebab_case() {
        assert_eq!(Trigger::AcknowledgeErrorAndEdit.to_string(), "acknowledge-error-and-edit");
        assert_eq!(
            Trigger::Resolved(SaveOutcome::Failure).to_string(),
            "resolved(failure)"
        );
    }
}
