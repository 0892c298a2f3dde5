//! Infrastructure layer - Configuration and logging
//!
//! Loads layered configuration and installs the process-wide `tracing`
//! subscriber.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, Environment, LoggingConfig, PreferencesConfig};
pub use telemetry::{TelemetryError, init_logging};
