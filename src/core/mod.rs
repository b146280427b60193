//! Core screen state types and logic.
//!
//! This module contains the pure part of the screen:
//! - `ScreenState` and the `State` trait
//! - The transition table
//! - Epoch tags for discarding stale save results
//! - Derived bindings and the transition history
//!
//! Nothing here performs I/O or spawns work.

mod binding;
mod epoch;
mod history;
mod state;
mod table;
mod trigger;

pub use binding::{Binding, DerivedBinding, Predicate};
pub use epoch::{Epoch, Resolution};
pub use history::{StateHistory, StateTransition};
pub use state::{ScreenState, State};
pub use table::{accepts, next_state};
pub use trigger::{SaveOutcome, Trigger};
