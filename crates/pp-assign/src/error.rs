//! Assignment error type.

use thiserror::Error;

use pp_core::FacilityId;

/// Errors produced by `pp-assign`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error("no facilities to assign orders to (existing and new lists are both empty)")]
    NoFacilities,

    #[error("facility id {0} appears more than once")]
    DuplicateFacility(FacilityId),
}

pub type AssignResult<T> = Result<T, AssignError>;
