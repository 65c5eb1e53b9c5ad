//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`marathon`] — [`FakeMarathon`](marathon::FakeMarathon), an in-memory
//!   [`MarathonApi`](crate::port::MarathonApi) with canned records and
//!   injectable failures.
//! - [`domain`] — Builders for apps and tasks.

pub mod domain;
pub mod marathon;
