//! Application layer - Use cases and orchestration
//!
//! Contains the model contract, the in-memory model, and command execution.
//! Commands arrive fully built from the domain layer and run here.

pub mod error;
pub mod ports;
pub mod sample_data;
pub mod services;

pub use error::CommandError;
pub use ports::*;
pub use sample_data::sample_pet_book;
pub use services::*;
