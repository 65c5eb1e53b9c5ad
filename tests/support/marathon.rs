use marathon_client::adapter::outbound::marathon::{Credentials, Marathon, RetryPolicy};
use wiremock::MockServer;

pub const TEST_ATTEMPTS: u32 = 3;

/// A client pointed at `server`, retrying without backoff and bypassing any
/// proxy configured in the environment.
pub fn client_for(server: &MockServer) -> Marathon {
    Marathon::new(server.address().to_string(), "http", None)
        .with_proxy_from_env(false)
        .with_retry(RetryPolicy::immediate(TEST_ATTEMPTS))
}

pub fn authenticated_client_for(server: &MockServer, user: &str, password: &str) -> Marathon {
    Marathon::new(
        server.address().to_string(),
        "http",
        Some(Credentials::new(user, Some(password.to_string()))),
    )
    .with_proxy_from_env(false)
    .with_retry(RetryPolicy::immediate(TEST_ATTEMPTS))
}
