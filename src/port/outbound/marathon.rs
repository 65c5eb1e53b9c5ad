//! Orchestrator query port.

use async_trait::async_trait;

use crate::domain::{App, AppId, Task};
use crate::error::Result;

/// Read-only queries against the orchestrator's control API.
///
/// Every call returns a freshly decoded record set. A failure means the state
/// is unknown; it is never reported as an empty list.
#[async_trait]
pub trait MarathonApi: Send + Sync {
    /// List all application definitions, in server order.
    async fn apps(&self) -> Result<Vec<App>>;

    /// List the running tasks of one application.
    async fn tasks(&self, app: &AppId) -> Result<Vec<Task>>;
}
