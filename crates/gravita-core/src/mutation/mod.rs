//! Optimistic Mutation Layer
//!
//! Seams between the controller and its surroundings:
//! - `TodoApi`: the REST backend
//! - `TaskStore`: wherever the task list lives (reactive store, `Rc<RefCell>`)
//! - `Notifier`: user-visible notices
//!
//! Everything is single-threaded; futures are `?Send`.

mod controller;
mod state;


use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::{find_task, Task, TaskDraft, TaskId, TaskPatch};
use crate::error::TodoResult;
use crate::wire::{BatchRestoreResponse, Confirmation, DeleteReceipt};

pub use controller::MutationController;
pub use state::{InFlight, Mutation, MutationState, Outcome, Rollback, Token};

/// REST backend operations
#[async_trait(?Send)]
pub trait TodoApi {
    /// GET /todos
    async fn list_todos(&self) -> TodoResult<Vec<Task>>;

    /// POST /todos
    async fn create_todo(&self, draft: &TaskDraft) -> TodoResult<Task>;

    /// PATCH /todos/{id}
    async fn update_todo(&self, id: TaskId, patch: &TaskPatch) -> TodoResult<Task>;

    /// PATCH /todos/{id}/toggle
    async fn toggle_todo(&self, id: TaskId) -> TodoResult<Task>;

    /// DELETE /todos/{id}, a soft delete into the recycle bin
    async fn delete_todo(&self, id: TaskId) -> TodoResult<DeleteReceipt>;

    /// GET /recycle-bin
    async fn list_recycle_bin(&self) -> TodoResult<Vec<Task>>;

    /// POST /recycle-bin/{id}/restore
    async fn restore_todo(&self, id: TaskId) -> TodoResult<Task>;

    /// POST /recycle-bin/batch-restore
    async fn batch_restore(&self, ids: &[TaskId]) -> TodoResult<BatchRestoreResponse>;

    /// DELETE /recycle-bin/{id}
    async fn purge_todo(&self, id: TaskId) -> TodoResult<Confirmation>;

    /// DELETE /recycle-bin
    async fn clear_recycle_bin(&self) -> TodoResult<Confirmation>;
}

/// An ordered task list the controller reads and patches
pub trait TaskStore: Clone {
    fn read<R>(&self, f: impl FnOnce(&[Task]) -> R) -> R;

    fn modify<R>(&self, f: impl FnOnce(&mut Vec<Task>) -> R) -> R;

    fn replace(&self, tasks: Vec<Task>) {
        self.modify(|current| *current = tasks);
    }

    fn snapshot(&self) -> Vec<Task> {
        self.read(|tasks| tasks.to_vec())
    }

    fn get(&self, id: TaskId) -> Option<Task> {
        self.read(|tasks| find_task(tasks, id).map(|index| tasks[index].clone()))
    }
}

/// `TaskStore` over a plain shared vector
#[derive(Debug, Clone, Default)]
pub struct SharedTasks(Rc<RefCell<Vec<Task>>>);

impl SharedTasks {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self(Rc::new(RefCell::new(tasks)))
    }
}

impl TaskStore for SharedTasks {
    fn read<R>(&self, f: impl FnOnce(&[Task]) -> R) -> R {
        f(&self.0.borrow())
    }

    fn modify<R>(&self, f: impl FnOnce(&mut Vec<Task>) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// A transient user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }
}

pub trait Notifier: Clone {
    fn notify(&self, notice: Notice);
}
