//! WoofAreYou command-line front end
//!
//! Argument parsing and the stdin session loop, shared by the binary and
//! its integration tests.

pub mod cli;
pub mod session;

pub use cli::{Cli, Commands, log_filter_from_verbosity};
pub use session::{SessionError, SessionSummary, run_session};
