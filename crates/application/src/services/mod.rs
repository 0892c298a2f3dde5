//! Application services - Use case implementations

mod command_service;
mod model_manager;

pub use command_service::{CommandResult, Executable, help_text, monthly_charge};
pub use model_manager::ModelManager;
