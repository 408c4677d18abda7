//! Wire Format
//!
//! JSON bodies exchanged with the REST backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Task, TaskId};

/// Why a task is being patched; the backend applies different side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationSource {
    /// Edited through a form
    Editor,
    /// Moved on the quadrant board
    Quadrant,
}

/// `GET /todos` and `GET /recycle-bin` bodies: an object keyed by id,
/// or a plain array from older servers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskListing {
    // Keys stay strings: untagged buffering can't parse them as integers.
    ById(BTreeMap<String, Task>),
    List(Vec<Task>),
}

impl TaskListing {
    /// Tasks in ascending id order for keyed bodies, as sent otherwise
    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            TaskListing::ById(map) => {
                let mut keyed: Vec<(u32, Task)> = map
                    .into_iter()
                    .map(|(key, task)| {
                        let order = key
                            .parse()
                            .ok()
                            .or(task.id.map(|id| id.0))
                            .unwrap_or(u32::MAX);
                        (order, task)
                    })
                    .collect();
                keyed.sort_by_key(|(order, _)| *order);
                keyed.into_iter().map(|(_, task)| task).collect()
            }
            TaskListing::List(tasks) => tasks,
        }
    }
}

/// `DELETE /todos/{id}` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteReceipt {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub todo: Option<Task>,
}

/// Bodies that only carry a message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRestoreRequest {
    pub todo_ids: Vec<TaskId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRestoreResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub restored_todos: Vec<Task>,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Human-readable message from an error body such as `{"detail": "..."}`.
/// Validation errors carry a list of `{ "msg": ... }` entries instead.
pub fn error_detail(body: &str) -> Option<String> {
    let ErrorBody { detail } = serde_json::from_str(body).ok()?;
    match detail {
        serde_json::Value::String(message) => Some(message),
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_keyed_by_id_is_ordered_numerically() {
        let body = r#"{"10":{"id":10,"title":"ten"},"2":{"id":2,"title":"two"}}"#;
        let listing: TaskListing = serde_json::from_str(body).unwrap();
        let titles: Vec<_> = listing.into_tasks().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["two", "ten"]);
    }

    #[test]
    fn test_listing_as_array() {
        let body = r#"[{"id":1,"title":"one","completed":true}]"#;
        let tasks = serde_json::from_str::<TaskListing>(body).unwrap().into_tasks();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].completed);
    }

    #[test]
    fn test_empty_listing() {
        let tasks = serde_json::from_str::<TaskListing>("{}").unwrap().into_tasks();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_batch_bodies() {
        let request = BatchRestoreRequest { todo_ids: vec![TaskId(1), TaskId(2)] };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"todo_ids":[1,2]}"#);

        let body = r#"{"message":"ok","restored_todos":[{"id":1,"title":"a"}]}"#;
        let response: BatchRestoreResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.restored_todos[0].id, Some(TaskId(1)));
    }

    #[test]
    fn test_delete_receipt() {
        let body = r#"{"message":"moved","todo":{"id":5,"title":"gone"}}"#;
        let receipt: DeleteReceipt = serde_json::from_str(body).unwrap();
        assert_eq!(receipt.todo.map(|t| t.title), Some("gone".to_string()));
    }

    #[test]
    fn test_error_detail_shapes() {
        assert_eq!(error_detail(r#"{"detail":"Todo not found"}"#).as_deref(), Some("Todo not found"));
        assert_eq!(
            error_detail(r#"{"detail":[{"msg":"title empty"},{"msg":"bad time"}]}"#).as_deref(),
            Some("title empty; bad time")
        );
        assert_eq!(error_detail("<html>502</html>"), None);
    }
}
