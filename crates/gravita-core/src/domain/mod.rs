//! Domain Layer
//!
//! Task entity, form payloads and in-place collection helpers.
//! Only serde is used here; no I/O.

mod collection;
mod draft;
mod task;

pub use collection::{find_task, insert_at, remove_task, replace_task, upsert_task};
pub use draft::{TaskDraft, TaskPatch};
pub use task::{Task, TaskId};
