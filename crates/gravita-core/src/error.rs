//! Error Types
//!
//! `ValidationError` covers client-side checks made before any request;
//! `TodoError` is what a controller operation can fail with.

use thiserror::Error;

use crate::domain::TaskId;

/// Common result type for task operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Pre-submission validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
    #[error("{field} time \"{value}\" is not in HH:MM format")]
    MalformedTime { field: &'static str, value: String },
    #[error("start time must be before end time")]
    TimeRangeInverted,
    #[error("{axis} score {value} is outside [-3, 3]")]
    ScoreOutOfRange { axis: &'static str, value: i32 },
}

/// Task operation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TodoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// An id-keyed operation was attempted on a task the server never saw
    #[error("task has no id, cannot {operation}")]
    MissingId { operation: &'static str },
    #[error("task {0} is not in the list")]
    NotFound(TaskId),
    /// The server answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Remote { status: u16, message: String },
    /// The request never got an answer
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl TodoError {
    /// Whether the failure happened before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            TodoError::Validation(_) | TodoError::MissingId { .. } | TodoError::NotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TodoError::from(ValidationError::TitleTooLong { max: 100 });
        assert_eq!(err.to_string(), "title must be at most 100 characters");
        assert!(err.is_local());

        let err = TodoError::Remote {
            status: 404,
            message: "Todo not found".to_string(),
        };
        assert_eq!(err.to_string(), "Todo not found (HTTP 404)");
        assert!(!err.is_local());
    }
}
