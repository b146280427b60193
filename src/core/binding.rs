//! Read/write boolean handles over derived predicates.
//!
//! Reactive UI toolkits usually want a two-way boolean handle to drive an
//! alert or a navigation link. The flags this crate exposes are computed
//! from the screen state, so the write half of the handle is inert: writes
//! are dropped and the next read still reflects the state.

use super::state::State;
use tracing::trace;

/// A two-way boolean handle as expected by binding-based UI code.
pub trait Binding {
    /// Current value.
    fn get(&self) -> bool;

    /// Write a value. Implementations may ignore it.
    fn set(&mut self, value: bool);
}

/// Pure predicate over a state.
pub type Predicate<S> = fn(&S) -> bool;

/// A binding whose value is a pure function of a borrowed state.
///
/// It holds no storage of its own. `set` is a no-op, so the binding can
/// never disagree with the state it was derived from.
///
/// # Example
///
/// ```rust
/// use screenflow::core::{Binding, DerivedBinding, ScreenState};
///
/// let state = ScreenState::Failed;
/// let mut alert = DerivedBinding::new("error-notice", &state, ScreenState::should_show_error_notice);
/// assert!(alert.get());
///
/// // The toolkit dismissing the alert does not change anything.
/// alert.set(false);
/// assert!(alert.get());
/// ```
pub struct DerivedBinding<'a, S: State> {
    label: &'static str,
    state: &'a S,
    predicate: Predicate<S>,
}

impl<'a, S: State> DerivedBinding<'a, S> {
    pub fn new(label: &'static str, state: &'a S, predicate: Predicate<S>) -> Self {
        Self {
            label,
            state,
            predicate,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<S: State> Binding for DerivedBinding<'_, S> {
    fn get(&self) -> bool {
        (self.predicate)(self.state)
    }

    fn set(&mut self, value: bool) {
        trace!(
            binding = self.label,
            value,
            state = self.state.name(),
            "ignoring write to derived binding"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScreenState;

    #[test]
    fn get_reflects_predicate() {
        let state = ScreenState::Succeeded;
        let binding = DerivedBinding::new("success", &state, ScreenState::should_show_success_notice);
        assert!(binding.get());

        let state = ScreenState::Editing;
        let binding = DerivedBinding::new("success", &state, ScreenState::should_show_success_notice);
        assert!(!binding.get());
    }

    #[test]
    fn writes_are_discarded() {
        let state = ScreenState::Completed;
        let mut binding =
            DerivedBinding::new("results", &state, ScreenState::should_navigate_to_results);

        binding.set(false);
        assert!(binding.get());

        let state = ScreenState::Pending;
        let mut binding =
            DerivedBinding::new("results", &state, ScreenState::should_navigate_to_results);
        binding.set(true);
        assert!(!binding.get());
    }

    #[test]
    fn label_is_kept() {
        let state = ScreenState::Editing;
        let binding = DerivedBinding::new("error-notice", &state, ScreenState::should_show_error_notice);
        assert_eq!(binding.label(), "error-notice");
    }
}
