//! Bounded retry with exponential backoff for Marathon requests.
//!
//! [`RetryingClient`] decorates a plain `reqwest` client: each GET is
//! attempted, the outcome classified as success, retryable or terminal, and
//! retryable outcomes are repeated after a backoff until the attempt budget
//! is spent.

use std::time::Duration;

use reqwest::{Client as HttpClient, Response, StatusCode};
use tokio::time::sleep;
use tracing::warn;
use url::Url;

use crate::error::{Error, Result};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(5);

/// How many times a request is attempted and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Wait before the second attempt; doubled for each attempt after that.
    pub initial_backoff: Duration,
    /// Upper bound for any single wait.
    pub max_backoff: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub const fn new(max_attempts: u32, initial_backoff: Duration, max_backoff: Duration) -> Self {
        Self {
            max_attempts,
            initial_backoff,
            max_backoff,
        }
    }

    /// Retry `max_attempts` times without sleeping in between.
    #[must_use]
    pub const fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO, Duration::ZERO)
    }

    /// Wait to apply after the given (1-based) failed attempt.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.initial_backoff
            .saturating_mul(1 << exponent)
            .min(self.max_backoff)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_ATTEMPTS,
            DEFAULT_INITIAL_BACKOFF,
            DEFAULT_MAX_BACKOFF,
        )
    }
}

/// Classification of a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Retry,
    Fail,
}

/// Classify a received status. Only 200 counts as success.
#[must_use]
pub fn classify_status(status: StatusCode) -> Verdict {
    if status == StatusCode::OK {
        Verdict::Success
    } else if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
        Verdict::Retry
    } else {
        Verdict::Fail
    }
}

/// Classify a transport error. Connection and timeout failures are transient.
#[must_use]
pub fn classify_error(err: &reqwest::Error) -> Verdict {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        Verdict::Retry
    } else {
        Verdict::Fail
    }
}

/// A `reqwest` client that retries GETs according to a [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryingClient {
    http: HttpClient,
    policy: RetryPolicy,
}

impl RetryingClient {
    #[must_use]
    pub fn new(http: HttpClient, policy: RetryPolicy) -> Self {
        Self { http, policy }
    }

    /// Send a GET, retrying transient failures.
    ///
    /// Resolves to a response only when its status is 200.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] when the last attempt failed in transport
    /// - [`Error::Status`] when the last attempt returned a non-200 status
    pub async fn get(&self, url: &Url) -> Result<Response> {
        let max_attempts = self.policy.attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            let failure = match self.http.get(url.clone()).send().await {
                Ok(response) => match classify_status(response.status()) {
                    Verdict::Success => return Ok(response),
                    verdict => (
                        verdict,
                        Error::Status {
                            status: response.status(),
                            url: redact(url),
                        },
                    ),
                },
                Err(err) => (classify_error(&err), Error::Http(err)),
            };

            match failure {
                (Verdict::Retry, err) if attempt < max_attempts => {
                    self.backoff(attempt, max_attempts, &err).await;
                }
                (_, err) => return Err(err),
            }
        }
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &Error) {
        let delay = self.policy.backoff(attempt);
        warn!(
            attempt,
            max_attempts,
            delay_ms = millis(delay),
            error = %err,
            "Marathon request failed, retrying"
        );
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

/// Whole milliseconds of `delay`, saturating at `u64::MAX`.
fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// Render a URL without its password, for errors and logs.
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    if url.password().is_some() {
        let _ = url.set_password(Some("***"));
    }
    url.to_string()
}
