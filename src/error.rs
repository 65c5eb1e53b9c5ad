use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport failure: connect, timeout, or the client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The final response carried a status other than 200.
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid app id {0:?}: must not be empty")]
    InvalidAppId(String),
}

impl Error {
    /// HTTP status associated with this failure, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) | Self::Body(err) => err.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
