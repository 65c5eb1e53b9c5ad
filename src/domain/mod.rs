//! Orchestrator record types.
//!
//! - [`App`] - An application definition as reported by `/v2/apps`
//! - [`Task`] - A running instance of an application from `/v2/apps/{id}/tasks`
//! - [`AppId`], [`TaskId`] - Identifier newtypes

pub mod app;
pub mod id;
pub mod task;

pub use app::{App, HealthCheck};
pub use id::{AppId, TaskId};
pub use task::{HealthCheckResult, Task};
