//! Application configuration
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - `config.toml` in the working directory, or an explicit file
//! - environment variables prefixed `WOOFAREYOU_`, nested keys joined with
//!   `__` (e.g. `WOOFAREYOU_LOGGING__JSON=true`)

mod logging;
mod preferences;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use logging::LoggingConfig;
pub use preferences::PreferencesConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WOOFAREYOU";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Preferences handed to the model at startup
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

impl AppConfig {
    /// Load configuration, reading `path` instead of `config.toml` when given
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("environment", "development")?
            .set_default("logging.filter", logging::DEFAULT_FILTER)?
            .set_default("logging.json", false)?
            .add_source(file)
            // Override with environment variables (e.g., WOOFAREYOU_LOGGING__FILTER)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(environment = %config.environment, "Configuration loaded");
        Ok(config)
    }

    /// Whether this is a production configuration
    pub const fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }
}
