//! Field checks for [`Item`], accumulating every violation.

use super::Item;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// A single problem with the form contents.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemViolation {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Name is too long ({len} characters, max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Description is too long ({len} characters, max {max})")]
    DescriptionTooLong { len: usize, max: usize },
}

type Check = Validation<(), NonEmptyVec<ItemViolation>>;

fn check_name_present(item: &Item) -> Check {
    if item.name.trim().is_empty() {
        Validation::fail(ItemViolation::EmptyName)
    } else {
        Validation::success(())
    }
}

fn check_name_length(item: &Item) -> Check {
    let len = item.name.chars().count();
    if len > MAX_NAME_LEN {
        Validation::fail(ItemViolation::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        })
    } else {
        Validation::success(())
    }
}

fn check_description_length(item: &Item) -> Check {
    let len = item.description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        Validation::fail(ItemViolation::DescriptionTooLong {
            len,
            max: MAX_DESCRIPTION_LEN,
        })
    } else {
        Validation::success(())
    }
}

pub(super) fn validate(item: &Item) -> Check {
    let checks = vec![
        check_name_present(item),
        check_name_length(item),
        check_description_length(item),
    ];

    Validation::all_vec(checks).map(|_| ())
}
