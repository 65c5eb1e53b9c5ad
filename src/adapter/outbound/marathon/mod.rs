//! Marathon HTTP API integration.
//!
//! - [`client`] - The [`Marathon`](client::Marathon) query client
//! - [`dto`] - Wire envelopes and their decoders
//! - [`retry`] - Bounded retry with backoff around a single GET
//! - [`settings`] - Endpoint, credential and transport configuration

pub mod client;
pub mod dto;
pub mod retry;
pub mod settings;

pub use client::Marathon;
pub use dto::{parse_apps, parse_tasks};
pub use retry::RetryPolicy;
pub use settings::{Credentials, MarathonConfig, MarathonHttpConfig};
