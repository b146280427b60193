//! The imperative shell around the pure core.
//!
//! The core decides what state comes next; this module owns the state,
//! spawns saves and routes their results back.
//!
//! # Key Concepts
//!
//! - **ScreenStateMachine**: intent methods, derived predicates and bindings
//! - **SaveOperation**: the injectable collaborator that persists an item
//! - **SimulatedSave**: fixed delay plus a random outcome
//! - **Resolver**: a clonable handle for marshalling results from workers

mod machine;
mod save;
mod simulated;

pub use machine::{Resolver, ScreenStateMachine};
pub use save::SaveOperation;
pub use simulated::SimulatedSave;
