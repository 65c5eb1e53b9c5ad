//! Marathon query client.
//!
//! Lists the applications a Marathon cluster runs and the live tasks of each
//! application, decoding the JSON responses into typed records for a
//! downstream consumer such as a service-discovery sync loop.
//!
//! # Architecture
//!
//! - **`port`** - The [`MarathonApi`](port::MarathonApi) trait: `apps` and `tasks`
//! - **`adapter::outbound::marathon`** - The HTTP implementation with
//!   URL construction, TLS/proxy transport, bounded retries and decoding
//! - **`domain`** - [`App`](domain::App), [`Task`](domain::Task) and their ids
//!
//! # Modules
//!
//! - [`adapter`] - Port implementations (HTTP client, CLI)
//! - [`domain`] - Record types
//! - [`error`] - Error types for the crate
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`port`] - Trait definitions
//! - `testkit` - Fakes and builders (requires the `testkit` feature)
//!
//! # Example
//!
//! ```no_run
//! use marathon_client::adapter::outbound::marathon::Marathon;
//! use marathon_client::port::MarathonApi;
//!
//! # async fn run() -> marathon_client::error::Result<()> {
//! let marathon = Marathon::new("marathon.mesos:8080", "http", None);
//! for app in marathon.apps().await? {
//!     let tasks = marathon.tasks(&app.id).await?;
//!     println!("{}: {} tasks", app.id, tasks.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
