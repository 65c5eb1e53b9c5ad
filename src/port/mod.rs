//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   consumer (sync / reconciliation) ──▶ MarathonApi ◀── adapter::outbound::marathon::Marathon
//!                                                  ◀── testkit::FakeMarathon
//! ```
//!
//! # Available Ports
//!
//! - [`MarathonApi`] - Application and task queries against the orchestrator

pub mod outbound;

pub use outbound::marathon::MarathonApi;
