//! Logging bootstrap
//!
//! Installs a `tracing` subscriber that writes to stderr, leaving stdout to
//! the command feedback.

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Pick the filter directives to use
///
/// An explicit override wins, then `RUST_LOG`, then the configured filter.
pub fn build_filter(
    config: &LoggingConfig,
    override_filter: Option<&str>,
) -> Result<EnvFilter, TelemetryError> {
    let directives = match override_filter {
        Some(filter) => filter.to_string(),
        None => std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| config.filter.clone()),
    };
    EnvFilter::try_new(&directives).map_err(|e| TelemetryError::InvalidFilter {
        filter: directives.clone(),
        reason: e.to_string(),
    })
}

/// Initialize logging for the process
///
/// Can only succeed once per process.
pub fn init_logging(
    config: &LoggingConfig,
    override_filter: Option<&str>,
) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config, override_filter)?;

    let json_layer = config
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json).then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(json = config.json, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn override_takes_precedence() {
        let config = LoggingConfig {
            filter: "info".to_string(),
            json: false,
        };
        let filter = build_filter(&config, Some("trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let config = LoggingConfig::default();
        let err = build_filter(&config, Some("application=loud")).unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidFilter { .. }));
        assert!(err.to_string().contains("application=loud"));
    }

    #[test]
    fn second_init_fails() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config, Some("warn"));
        let second = init_logging(&config, Some("warn"));
        assert!(matches!(second, Err(TelemetryError::Init(_))));
    }
}
