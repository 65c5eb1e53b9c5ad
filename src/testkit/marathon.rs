//! In-memory [`MarathonApi`] for tests.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;

use crate::adapter::outbound::marathon::Marathon;
use crate::domain::{App, AppId, Task};
use crate::error::{Error, Result};
use crate::port::MarathonApi;

/// A fake orchestrator holding canned apps and tasks.
///
/// Queued failures are returned before any canned data, one per call.
/// Task queries for unknown apps fail with a 404 status, like Marathon does.
#[derive(Default)]
pub struct FakeMarathon {
    apps: Vec<App>,
    tasks: HashMap<AppId, Vec<Task>>,
    app_failures: Mutex<VecDeque<Error>>,
    task_failures: Mutex<VecDeque<Error>>,
    app_requests: Mutex<u32>,
    task_requests: Mutex<Vec<AppId>>,
}

impl FakeMarathon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_apps(mut self, apps: Vec<App>) -> Self {
        self.apps = apps;
        self
    }

    /// Register the tasks of `app`. Also makes `app` known to task queries.
    pub fn with_tasks(mut self, app: impl Into<AppId>, tasks: Vec<Task>) -> Self {
        self.tasks.insert(app.into(), tasks);
        self
    }

    /// Fail the next `apps()` call with `err`.
    pub fn fail_next_apps(&self, err: Error) {
        self.app_failures.lock().push_back(err);
    }

    /// Fail the next `tasks()` call with `err`.
    pub fn fail_next_tasks(&self, err: Error) {
        self.task_failures.lock().push_back(err);
    }

    /// Number of `apps()` calls so far.
    pub fn app_requests(&self) -> u32 {
        *self.app_requests.lock()
    }

    /// App ids passed to `tasks()` so far, in call order.
    pub fn task_requests(&self) -> Vec<AppId> {
        self.task_requests.lock().clone()
    }

    fn lookup(&self, app: &AppId) -> Option<&Vec<Task>> {
        self.tasks.get(app).or_else(|| {
            // Accept "/x" and "x" for the same app, as the HTTP path does.
            let segment = app.path_segment()?;
            self.tasks
                .iter()
                .find(|(id, _)| id.path_segment() == Some(segment))
                .map(|(_, tasks)| tasks)
        })
    }
}

#[async_trait]
impl MarathonApi for FakeMarathon {
    async fn apps(&self) -> Result<Vec<App>> {
        *self.app_requests.lock() += 1;
        if let Some(err) = self.app_failures.lock().pop_front() {
            return Err(err);
        }
        Ok(self.apps.clone())
    }

    async fn tasks(&self, app: &AppId) -> Result<Vec<Task>> {
        self.task_requests.lock().push(app.clone());
        let path = Marathon::tasks_path(app)?;
        if let Some(err) = self.task_failures.lock().pop_front() {
            return Err(err);
        }
        self.lookup(app).cloned().ok_or_else(|| Error::Status {
            status: StatusCode::NOT_FOUND,
            url: format!("fake://marathon{path}"),
        })
    }
}
