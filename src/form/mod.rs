//! The item being created on the screen.
//!
//! The state machine passes the item to the save operation without looking
//! at it. Validation lives here for the presentation layer, which uses it to
//! decide whether the submit control is enabled.

mod validation;

pub use validation::{ItemViolation, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Form payload handed to the save operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Check every field, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ItemViolation>> {
        validation::validate(self)
    }

    /// Whether the item passes validation.
    pub fn is_submittable(&self) -> bool {
        self.validate().is_success()
    }
}
