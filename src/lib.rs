//! Screenflow: a create-item screen driven by one state enum
//!
//! A form screen that submits asynchronously is easy to model with a handful
//! of booleans (`is_saving`, `show_error`, `show_success`, `navigate`) and
//! just as easy to get into a state where two of them disagree. Screenflow
//! models the screen as a single [`ScreenState`] and derives every flag from
//! it.
//!
//! # Core Concepts
//!
//! - **ScreenState**: exactly one of Editing, Pending, Succeeded, Failed,
//!   Completed
//! - **Transition table**: a pure `(state, trigger) -> Option<state>` function
//! - **Epochs**: every visit gets a generation tag so results from an earlier
//!   visit are dropped
//! - **Derived bindings**: two-way boolean handles whose writes are ignored
//!
//! # Example
//!
//! ```rust
//! use screenflow::core::{next_state, ScreenState, Trigger};
//!
//! let mut state = ScreenState::default();
//! for trigger in [Trigger::Submit, Trigger::Submit] {
//!     if let Some(next) = next_state(&state, &trigger) {
//!         state = next;
//!     }
//! }
//!
//! // The second submit was not accepted while pending.
//! assert_eq!(state, ScreenState::Pending);
//! assert!(!state.should_show_error_notice());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod form;

// Re-export commonly used types
pub use crate::builder::SimulatedSaveBuilder;
pub use crate::core::{Binding, Epoch, Resolution, SaveOutcome, ScreenState, State, Trigger};
pub use crate::effects::{SaveOperation, ScreenStateMachine, SimulatedSave};
pub use crate::form::Item;
