//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; the Marathon credential comes
//! from the `MARATHON_AUTH` environment variable (`user` or `user:password`).
//!
//! # Example
//!
//! ```no_run
//! use marathon_client::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::marathon::settings::{Credentials, MarathonConfig};
use crate::error::{ConfigError, Result};

/// Environment variable holding the Marathon credential.
pub const MARATHON_AUTH_ENV: &str = "MARATHON_AUTH";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub marathon: MarathonConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML, reading the credential from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, `MARATHON_AUTH` is set but
    /// invalid, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let auth = std::env::var(MARATHON_AUTH_ENV).ok();
        Self::parse_toml_with_auth(content, auth.as_deref())
    }

    /// Parse configuration from TOML with an explicit credential string.
    ///
    /// # Errors
    ///
    /// Same as [`Config::parse_toml`].
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_auth(content: &str, auth: Option<&str>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Credentials never come from the config file.
        config.marathon.auth = auth
            .filter(|auth| !auth.is_empty())
            .map(str::parse::<Credentials>)
            .transpose()?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty location, an unsupported
    /// protocol, or an inconsistent retry policy.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let marathon = &self.marathon;
        if marathon.location.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "location" }.into());
        }
        if !matches!(marathon.protocol.as_str(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "protocol",
                reason: format!("expected http or https, got {:?}", marathon.protocol),
            }
            .into());
        }
        if marathon.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if marathon.http.retry_max_backoff_ms < marathon.http.retry_backoff_ms {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_backoff_ms",
                reason: "must not be below retry_backoff_ms".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
