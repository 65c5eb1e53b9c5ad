//! Factory functions that construct configured components.
//!
//! - [`build_marathon`] - Query client behind the [`MarathonApi`] port

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::marathon::Marathon;
use crate::infrastructure::config::settings::Config;
use crate::port::MarathonApi;

/// Build the Marathon query client described by `config`.
pub fn build_marathon(config: &Config) -> Arc<dyn MarathonApi> {
    let marathon = &config.marathon;
    if marathon.no_verify_ssl {
        warn!(location = %marathon.location, "TLS certificate verification disabled");
    }
    info!(
        location = %marathon.location,
        protocol = %marathon.protocol,
        authenticated = marathon.auth.is_some(),
        "Marathon client configured"
    );

    Arc::new(Marathon::from_config(marathon))
}
