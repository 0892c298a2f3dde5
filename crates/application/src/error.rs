//! Application-level errors
//!
//! The `Display` text of every variant is the message shown to the user.

use domain::{DomainError, commands::usage};
use thiserror::Error;

/// Reasons a command can fail while running against the model
///
/// A failed command never leaves a partial change behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The index does not point into the displayed list
    #[error("The pet index provided is invalid")]
    InvalidPetIndex,

    /// The pet would duplicate an existing one
    #[error("This pet already exists in the address book")]
    DuplicatePet,

    /// An edit named no field to change
    #[error("At least one field to edit must be provided.")]
    NoFieldsEdited,

    /// The sort keyword is not a known field
    #[error("Unknown sort field: {0}\n{help}", help = usage::SORT)]
    UnknownSortField(String),

    /// The undo history is empty
    #[error("There is nothing to undo!")]
    NothingToUndo,

    /// A charge was requested without a rate
    #[error("No charge set! {help}", help = usage::CHARGE)]
    NoChargeSet,

    /// The monthly total does not fit in a finite amount
    #[error("The charge for {month} is too large to compute")]
    ChargeTooLarge { month: String },
}

impl CommandError {
    /// Map a rejection from the pet book to the user-facing variant
    pub(crate) fn rejected(error: DomainError) -> Self {
        match error {
            DomainError::DuplicatePet(_) => Self::DuplicatePet,
            other => Self::Domain(other),
        }
    }
}
