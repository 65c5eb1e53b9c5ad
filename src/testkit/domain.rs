//! Builders for domain records used across tests.

use crate::domain::{App, HealthCheck, HealthCheckResult, Task};

/// An app with the given id and labels.
pub fn app(id: &str, labels: &[(&str, &str)]) -> App {
    let mut app = App::new(id);
    app.labels = labels
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    app
}

/// An app with a single HTTP health check on its first port.
pub fn app_with_http_check(id: &str, path: &str) -> App {
    let mut app = App::new(id);
    app.health_checks.push(HealthCheck {
        protocol: Some("HTTP".into()),
        path: Some(path.into()),
        port_index: Some(0),
        extra: Default::default(),
    });
    app
}

/// A running task of `app_id` with the given ports.
pub fn task(id: &str, app_id: &str, host: &str, ports: &[u16]) -> Task {
    let mut task = Task::new(id, app_id, host);
    task.ports = ports.to_vec();
    task.state = Some("TASK_RUNNING".into());
    task
}

/// A task whose health checks all report `alive`.
pub fn checked_task(id: &str, app_id: &str, alive: bool) -> Task {
    let mut task = task(id, app_id, "localhost", &[31000]);
    task.health_check_results.push(HealthCheckResult {
        alive: Some(alive),
        extra: Default::default(),
    });
    task
}
