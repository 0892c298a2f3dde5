//! Command execution
//!
//! This module is split into focused sub-modules:
//! - [`pets`]: add, edit, delete, clear and list
//! - [`view`]: find and sort of the displayed list
//! - [`history`]: undo
//! - [`billing`]: monthly charge computation
//! - [`attendance`]: present and absent marks
//! - [`care`]: diet and appointment
//! - [`system`]: help and exit

mod attendance;
mod billing;
mod care;
mod history;
mod pets;
mod system;
mod view;

use domain::{Index, Pet, PetCommand};
use tracing::{debug, info, instrument, warn};

pub use billing::monthly_charge;
pub use system::help_text;

use crate::{error::CommandError, ports::ModelPort};

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback: String,
    /// The front end should show help
    pub show_help: bool,
    /// The front end should close
    pub exit: bool,
}

impl CommandResult {
    /// A plain feedback message
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    /// Feedback asking the front end to show help
    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    /// Feedback asking the front end to close
    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// Something that runs against the model
pub trait Executable {
    /// Run against `model`, returning feedback for the user
    ///
    /// On error the model is left exactly as it was.
    fn execute(&self, model: &mut dyn ModelPort) -> Result<CommandResult, CommandError>;
}

impl Executable for PetCommand {
    #[instrument(skip(self, model), fields(command = self.word()))]
    fn execute(&self, model: &mut dyn ModelPort) -> Result<CommandResult, CommandError> {
        debug!(description = %self.description(), "Executing command");

        let result = match self {
            Self::Add { pet } => pets::handle_add(model, pet),
            Self::Edit { index, descriptor } => pets::handle_edit(model, *index, descriptor),
            Self::Delete { index } => pets::handle_delete(model, *index),
            Self::Clear => Ok(pets::handle_clear(model)),
            Self::List => Ok(pets::handle_list(model)),
            Self::Find { filter } => Ok(view::handle_find(model, filter)),
            Self::Sort { field } => view::handle_sort(model, field),
            Self::Undo => history::handle_undo(model),
            Self::Charge { index, month, rate } => {
                billing::handle_charge(model, *index, *month, *rate)
            },
            Self::Present {
                index,
                date,
                transport,
            } => attendance::handle_present(model, *index, *date, *transport),
            Self::Absent { index, date } => attendance::handle_absent(model, *index, *date),
            Self::Diet { index, diet } => care::handle_diet(model, *index, diet),
            Self::Appointment { index, appointment } => {
                care::handle_appointment(model, *index, appointment.as_ref())
            },
            Self::Help => Ok(system::handle_help()),
            Self::Exit => Ok(system::handle_exit()),
        };

        match &result {
            Ok(outcome) if self.is_mutating() => {
                info!(feedback = %outcome.feedback, "Pet book updated");
            },
            Ok(_) => {},
            Err(e) => warn!(error = %e, "Command rejected"),
        }
        result
    }
}

/// The pet at `index` in the displayed list
fn pet_at(model: &dyn ModelPort, index: Index) -> Result<Pet, CommandError> {
    model
        .filtered_pets()
        .into_iter()
        .nth(index.zero_based())
        .ok_or(CommandError::InvalidPetIndex)
}

// ---------------------------------------------------------------------------
// Test support: shared fixtures for handler sub-module tests
// ---------------------------------------------------------------------------
