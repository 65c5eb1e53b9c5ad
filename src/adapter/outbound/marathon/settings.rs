//! Marathon endpoint configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use super::retry::RetryPolicy;
use crate::error::ConfigError;

/// User credential carried as URL userinfo (basic auth).
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Parses `user` or `user:password`. Only the first `:` separates the two.
impl FromStr for Credentials {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (username, password) = match s.split_once(':') {
            Some((user, pass)) => (user, Some(pass.to_string())),
            None => (s, None),
        };
        if username.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "MARATHON_AUTH",
                reason: "username must not be empty".to_string(),
            });
        }
        Ok(Self::new(username, password))
    }
}

/// Marathon endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MarathonConfig {
    /// Host authority, e.g. `marathon.mesos:8080`.
    #[serde(default = "default_location")]
    pub location: String,
    /// URL scheme: `http` or `https`.
    #[serde(default = "default_protocol")]
    pub protocol: String,
    /// Skip TLS certificate verification.
    #[serde(default)]
    pub no_verify_ssl: bool,
    /// Credential, loaded from `MARATHON_AUTH` (never from the config file).
    #[serde(skip)]
    pub auth: Option<Credentials>,
    #[serde(default)]
    pub http: MarathonHttpConfig,
}

fn default_location() -> String {
    "localhost:8080".into()
}

fn default_protocol() -> String {
    "http".into()
}

impl Default for MarathonConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            protocol: default_protocol(),
            no_verify_ssl: false,
            auth: None,
            http: MarathonHttpConfig::default(),
        }
    }
}

/// Marathon HTTP transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MarathonHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Total attempts per request, including the first.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff before the first retry in milliseconds; doubled per retry.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// Upper bound for a single backoff in milliseconds.
    #[serde(default = "default_http_retry_max_backoff_ms")]
    pub retry_max_backoff_ms: u64,
    /// Resolve proxies from `HTTP_PROXY` / `HTTPS_PROXY` / `NO_PROXY`.
    #[serde(default = "default_true")]
    pub proxy_from_env: bool,
}

const fn default_true() -> bool {
    true
}

const fn default_http_timeout_ms() -> u64 {
    5000
}

const fn default_http_connect_timeout_ms() -> u64 {
    2000
}

const fn default_http_retry_max_attempts() -> u32 {
    3
}

const fn default_http_retry_backoff_ms() -> u64 {
    500
}

const fn default_http_retry_max_backoff_ms() -> u64 {
    5000
}

impl MarathonHttpConfig {
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_max_attempts,
            Duration::from_millis(self.retry_backoff_ms),
            Duration::from_millis(self.retry_max_backoff_ms),
        )
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for MarathonHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
            retry_max_backoff_ms: default_http_retry_max_backoff_ms(),
            proxy_from_env: true,
        }
    }
}
