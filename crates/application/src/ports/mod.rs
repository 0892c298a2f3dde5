//! Port definitions for application layer
//!
//! Ports are interfaces that define what commands need from the outside.
//! The in-memory model implements them; tests substitute mocks.

mod model_port;

#[cfg(test)]
pub use model_port::MockModelPort;
pub use model_port::ModelPort;
