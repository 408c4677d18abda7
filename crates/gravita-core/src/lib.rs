//! TodoGravita Core
//!
//! Browser-independent logic behind the priority board:
//! - domain: tasks, drafts and collection helpers
//! - quadrant: score <-> canvas position mapping and quadrant classification
//! - priority / board: ordering, partitioning and statistics
//! - validation: pre-submission checks
//! - wire: JSON shapes exchanged with the REST backend
//! - mutation: the optimistic mutation controller

pub mod board;
pub mod domain;
pub mod error;
pub mod mutation;
pub mod priority;
pub mod quadrant;
pub mod settings;
pub mod validation;
pub mod wire;

pub use domain::{Task, TaskDraft, TaskId, TaskPatch};
pub use error::{TodoError, TodoResult, ValidationError};
pub use mutation::{
    MutationController, Notice, NoticeLevel, Notifier, Outcome, SharedTasks, TaskStore, TodoApi,
};
pub use quadrant::Quadrant;
pub use settings::{MutationConfig, Settings, Theme};
