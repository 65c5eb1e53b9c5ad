//! Marathon response envelopes.
//!
//! List endpoints wrap their records in a single-key object
//! (`{"apps": [...]}`, `{"tasks": [...]}`). The envelopes exist only to
//! decode that shape and are dropped once the records are extracted.

use serde::Deserialize;

use crate::domain::{App, Task};
use crate::error::Result;

/// Body of `GET /v2/apps`.
#[derive(Debug, Deserialize)]
pub struct AppsResponse {
    pub apps: Vec<App>,
}

/// Body of `GET /v2/apps/{id}/tasks`.
#[derive(Debug, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

/// Decode an apps envelope and return its records.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::error::Error::Json) for malformed JSON or
/// when the `apps` key is missing or not a list of apps.
pub fn parse_apps(body: &[u8]) -> Result<Vec<App>> {
    let response: AppsResponse = serde_json::from_slice(body)?;
    Ok(response.apps)
}

/// Decode a tasks envelope and return its records.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::error::Error::Json) for malformed JSON or
/// when the `tasks` key is missing or not a list of tasks.
pub fn parse_tasks(body: &[u8]) -> Result<Vec<Task>> {
    let response: TasksResponse = serde_json::from_slice(body)?;
    Ok(response.tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn parse_apps_empty_list() {
        let apps = parse_apps(br#"{"apps": []}"#).unwrap();
        assert!(apps.is_empty());
    }

    #[test]
    fn parse_apps_keeps_server_order() {
        let body = br#"{"apps": [{"id": "/b"}, {"id": "/a"}, {"id": "/c"}]}"#;
        let ids: Vec<_> = parse_apps(body)
            .unwrap()
            .into_iter()
            .map(|app| app.id.to_string())
            .collect();
        assert_eq!(ids, ["/b", "/a", "/c"]);
    }

    #[test]
    fn parse_apps_truncated_json_fails() {
        let result = parse_apps(br#"{"apps": ["#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn parse_apps_missing_envelope_key_fails() {
        let result = parse_apps(br#"{"tasks": []}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn parse_apps_null_list_fails() {
        let result = parse_apps(br#"{"apps": null}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn parse_apps_wrong_record_shape_fails() {
        let result = parse_apps(br#"{"apps": ["/a", "/b"]}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn parse_apps_prefers_id_when_name_is_also_present() {
        let body = br#"{"apps":[{"id":"/a","name":"a"},{"name":"/b"}]}"#;
        let apps = parse_apps(body).unwrap();

        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].id.as_str(), "/a");
        assert_eq!(apps[0].extra.get("name"), Some(&json!("a")));
        assert_eq!(apps[1].id.as_str(), "/b");
        assert!(apps[1].extra.is_empty());
        assert_eq!(
            serde_json::to_value(&apps[0]).unwrap(),
            json!({"id": "/a", "name": "a"})
        );
    }

    #[test]
    fn parse_apps_round_trips_records() {
        let body = json!({
            "apps": [
                {"id": "/web", "instances": 2, "labels": {"consul": "web"}, "cpus": 0.5},
                {"id": "/worker", "env": {"QUEUE": "jobs"}}
            ]
        });
        let apps = parse_apps(body.to_string().as_bytes()).unwrap();

        let encoded = serde_json::to_value(&apps).unwrap();
        assert_eq!(encoded, body["apps"]);

        let decoded: Vec<App> = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, apps);
    }

    #[test]
    fn parse_tasks_decodes_records() {
        let body = br#"{"tasks": [
            {"id": "web.1", "appId": "/web", "host": "10.0.0.1", "ports": [31000]},
            {"id": "web.2", "appId": "/web", "host": "10.0.0.2", "ports": [31001]}
        ]}"#;
        let tasks = parse_tasks(body).unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id.as_str(), "web.1");
        assert_eq!(tasks[1].host, "10.0.0.2");
        assert_eq!(tasks[1].ports, vec![31001]);
    }

    #[test]
    fn parse_tasks_empty_list() {
        assert!(parse_tasks(br#"{"tasks": []}"#).unwrap().is_empty());
    }

    #[test]
    fn parse_tasks_malformed_json_fails() {
        let result = parse_tasks(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn parse_tasks_apps_envelope_fails() {
        let result = parse_tasks(br#"{"apps": []}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
