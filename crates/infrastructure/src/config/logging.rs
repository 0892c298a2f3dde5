//! Logging configuration

use serde::{Deserialize, Serialize};

/// Filter used when neither the configuration nor `RUST_LOG` names one
pub(super) const DEFAULT_FILTER: &str = "info";

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "application=debug,warn")
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit one JSON object per event instead of human-readable lines
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}
