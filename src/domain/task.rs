//! Running task instances.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::{AppId, TaskId};

/// Result of one health check against a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alive: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthCheckResult {
    /// Whether the check passed. A result without `alive` counts as failing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.unwrap_or(false)
    }
}

/// A single running instance of an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub app_id: AppId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_check_results: Vec<HealthCheckResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staged_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    /// Fields not interpreted by this crate.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Create a task for `app_id` running on `host`.
    pub fn new(id: impl Into<TaskId>, app_id: impl Into<AppId>, host: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            app_id: app_id.into(),
            host: host.into(),
            ports: Vec::new(),
            health_check_results: Vec::new(),
            state: None,
            staged_at: None,
            started_at: None,
            extra: Map::new(),
        }
    }
}
