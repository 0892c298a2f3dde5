//! Domain layer for WoofAreYou
//!
//! Contains the pet records, their value objects, the attendance calendar,
//! the command variants and domain errors. This layer performs no I/O.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod value_objects;
pub mod view;

pub use commands::{EditPetDescriptor, PetCommand};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
pub use view::{PetFilter, SortField};
