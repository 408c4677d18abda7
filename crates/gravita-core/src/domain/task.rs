//! Task Entity
//!
//! A to-do item as the backend stores it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::BoardSlot;
use crate::error::{TodoError, TodoResult};
use crate::quadrant::Quadrant;

/// Backend-assigned task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TaskId {
    fn from(raw: u32) -> Self {
        TaskId(raw)
    }
}

/// A to-do item
///
/// `id` is absent until the backend has created the task. Both scores
/// range over [-3, 3]; a missing score means "unclassified".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Importance axis, named `future_score` by the backend
    #[serde(rename = "future_score", default, skip_serializing_if = "Option::is_none")]
    pub importance_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_score: Option<i32>,
    /// Computed by the server from the two scores
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Task {
    /// Create an incomplete, unclassified task
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id: Some(TaskId(id)),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builder-style score assignment, mostly for fixtures
    pub fn with_scores(mut self, importance: i32, urgency: i32) -> Self {
        self.importance_score = Some(importance);
        self.urgency_score = Some(urgency);
        self
    }

    /// Both scores, when the task has been classified on both axes
    pub fn scores(&self) -> Option<(i32, i32)> {
        Some((self.importance_score?, self.urgency_score?))
    }

    /// Whether the task is drawn on the quadrant board
    pub fn is_assigned(&self) -> bool {
        self.scores().is_some() && !self.completed
    }

    pub fn board_slot(&self) -> BoardSlot {
        match (self.scores(), self.completed) {
            (None, _) => BoardSlot::Unassigned,
            (Some(_), false) => BoardSlot::Visible,
            (Some(_), true) => BoardSlot::Hidden,
        }
    }

    pub fn quadrant(&self) -> Option<Quadrant> {
        self.scores()
            .map(|(importance, urgency)| Quadrant::classify(importance, urgency))
    }

    pub fn has_time_range(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// The id, or a data-integrity error naming the aborted operation
    pub fn require_id(&self, operation: &'static str) -> TodoResult<TaskId> {
        self.id.ok_or(TodoError::MissingId { operation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(1, "Write report");
        assert_eq!(task.id, Some(TaskId(1)));
        assert!(!task.completed);
        assert!(task.scores().is_none());
        assert!(!task.is_assigned());
    }

    #[test]
    fn test_assignment_requires_both_scores_and_open_task() {
        let mut task = Task::new(1, "a");
        task.importance_score = Some(2);
        assert!(!task.is_assigned());

        task.urgency_score = Some(-1);
        assert!(task.is_assigned());

        task.completed = true;
        assert!(!task.is_assigned());
        assert_eq!(task.board_slot(), BoardSlot::Hidden);
    }

    #[test]
    fn test_backend_field_names() {
        let json = r#"{"id":7,"title":"Plan","completed":false,"future_score":2,"urgency_score":-1,"final_priority":366}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, Some(TaskId(7)));
        assert_eq!(task.importance_score, Some(2));
        assert_eq!(task.urgency_score, Some(-1));
        assert_eq!(task.final_priority, Some(366));
        assert!(task.description.is_none());

        let out = serde_json::to_value(&task).unwrap();
        assert_eq!(out["future_score"], 2);
        assert!(out.get("importance_score").is_none());
        assert!(out.get("start_time").is_none());
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let task = Task {
            title: "draft".to_string(),
            ..Default::default()
        };
        assert_eq!(
            task.require_id("restore"),
            Err(TodoError::MissingId { operation: "restore" })
        );
    }
}
