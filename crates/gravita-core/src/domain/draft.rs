//! Form Payloads
//!
//! `TaskDraft` is what the create/edit forms produce; `TaskPatch` is the
//! PATCH body sent for an existing task.

use serde::{Deserialize, Serialize};

use super::task::Task;
use crate::wire::OperationSource;

/// User-entered task fields, normalised but not yet validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "future_score", default, skip_serializing_if = "Option::is_none")]
    pub importance_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            ..Default::default()
        }
    }

    /// Build a draft from raw form inputs, trimming text and dropping blanks
    pub fn from_form(
        title: &str,
        description: &str,
        start_time: &str,
        end_time: &str,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            description: non_blank(Some(description.to_string())),
            importance_score: None,
            urgency_score: None,
            start_time: non_blank(Some(start_time.to_string())),
            end_time: non_blank(Some(end_time.to_string())),
        }
    }

    /// Seed an edit form from an existing task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            importance_score: task.importance_score,
            urgency_score: task.urgency_score,
            start_time: task.start_time.clone(),
            end_time: task.end_time.clone(),
        }
    }

    pub fn with_scores(mut self, importance: Option<i32>, urgency: Option<i32>) -> Self {
        self.importance_score = importance;
        self.urgency_score = urgency;
        self
    }
}

/// PATCH /todos/{id} body.
///
/// The server only touches keys present in the body, so empty scores and
/// times go out as `null` to clear them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPatch {
    pub title: String,
    pub description: String,
    #[serde(rename = "future_score")]
    pub importance_score: Option<i32>,
    pub urgency_score: Option<i32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub operation_source: OperationSource,
}

impl TaskPatch {
    /// Patch carrying an edit form's fields
    pub fn from_draft(draft: &TaskDraft, source: OperationSource) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone().unwrap_or_default(),
            importance_score: draft.importance_score,
            urgency_score: draft.urgency_score,
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
            operation_source: source,
        }
    }

    /// Patch re-sending a whole task, as the board does after a drop
    pub fn from_task(task: &Task, source: OperationSource) -> Self {
        Self::from_draft(&TaskDraft::from_task(task), source)
    }

    /// Merge the patched fields into a local task
    pub fn apply_to(&self, task: &mut Task) {
        task.title = self.title.clone();
        task.description = Some(self.description.clone()).filter(|d| !d.is_empty());
        task.importance_score = self.importance_score;
        task.urgency_score = self.urgency_score;
        task.start_time = self.start_time.clone();
        task.end_time = self.end_time.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_normalisation() {
        let draft = TaskDraft::from_form("  Call Bob ", "   ", "09:00", "");
        assert_eq!(draft.title, "Call Bob");
        assert!(draft.description.is_none());
        assert_eq!(draft.start_time.as_deref(), Some("09:00"));
        assert!(draft.end_time.is_none());
    }

    #[test]
    fn test_patch_body_carries_operation_source() {
        let task = Task::new(3, "Move me").with_scores(1, -2);
        let patch = TaskPatch::from_task(&task, OperationSource::Quadrant);
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body["operation_source"], "quadrant");
        assert_eq!(body["future_score"], 1);
        assert_eq!(body["urgency_score"], -2);
        assert_eq!(body["description"], "");
        assert!(body["start_time"].is_null());
    }

    #[test]
    fn test_cleared_fields_are_sent_as_null() {
        let draft = TaskDraft::from_form("Unscore me", "", "", "");
        let patch = TaskPatch::from_draft(&draft, OperationSource::Editor);
        let body = serde_json::to_value(&patch).unwrap();
        for key in ["future_score", "urgency_score", "start_time", "end_time"] {
            assert!(body.get(key).is_some_and(|value| value.is_null()), "{key} missing");
        }
    }

    #[test]
    fn test_patch_merge_keeps_identity() {
        let mut task = Task::new(4, "Old");
        task.completed = true;
        task.final_priority = Some(300);

        let draft = TaskDraft::new("New").with_scores(Some(0), Some(0));
        TaskPatch::from_draft(&draft, OperationSource::Editor).apply_to(&mut task);

        assert_eq!(task.title, "New");
        assert_eq!(task.scores(), Some((0, 0)));
        assert_eq!(task.id.map(|id| id.0), Some(4));
        assert!(task.completed);
        assert_eq!(task.final_priority, Some(300));
    }
}
