//! Application definitions.
//!
//! Only the fields a consumer commonly routes on are typed. Everything else
//! Marathon emits is kept verbatim in [`App::extra`] so records can be
//! re-encoded without losing data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::AppId;

/// A health check declared on an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_index: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An application definition managed by the orchestrator.
///
/// The identifying field is `"id"` on the wire. `"name"` is used only when
/// `"id"` is absent; otherwise it stays in [`App::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawApp")]
pub struct App {
    pub id: AppId,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_checks: Vec<HealthCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,
    /// Fields not interpreted by this crate.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl App {
    /// Create an app with only its id set.
    pub fn new(id: impl Into<AppId>) -> Self {
        Self {
            id: id.into(),
            labels: BTreeMap::new(),
            health_checks: Vec::new(),
            instances: None,
            extra: Map::new(),
        }
    }

    /// Look up a label value.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

/// Wire shape of [`App`] before the identifier is resolved.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawApp {
    #[serde(default)]
    id: Option<AppId>,
    #[serde(default)]
    labels: BTreeMap<String, String>,
    #[serde(default)]
    health_checks: Vec<HealthCheck>,
    #[serde(default)]
    instances: Option<u32>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawApp> for App {
    type Error = String;

    fn try_from(raw: RawApp) -> Result<Self, Self::Error> {
        let mut extra = raw.extra;
        let id = match raw.id {
            Some(id) => id,
            None => match extra.remove("name") {
                Some(Value::String(name)) => AppId::new(name),
                Some(other) => return Err(format!("invalid app name {other}, expected a string")),
                None => return Err("missing field `id`".to_string()),
            },
        };

        Ok(Self {
            id,
            labels: raw.labels,
            health_checks: raw.health_checks,
            instances: raw.instances,
            extra,
        })
    }
}
