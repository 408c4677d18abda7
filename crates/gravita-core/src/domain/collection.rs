//! Collection Helpers
//!
//! In-place operations on the ordered task list, keyed by id.

use super::task::{Task, TaskId};

/// Position of a task in the list
pub fn find_task(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id == Some(id))
}

/// Replace the task with the same id, keeping its position.
/// Returns false when no such task exists.
pub fn replace_task(tasks: &mut [Task], updated: Task) -> bool {
    let Some(id) = updated.id else { return false };
    match tasks.iter_mut().find(|task| task.id == Some(id)) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove a task by id, returning where it was
pub fn remove_task(tasks: &mut Vec<Task>, id: TaskId) -> Option<(usize, Task)> {
    let index = find_task(tasks, id)?;
    Some((index, tasks.remove(index)))
}

/// Replace the task with the same id, or append it
pub fn upsert_task(tasks: &mut Vec<Task>, task: Task) {
    if !replace_task(tasks, task.clone()) {
        tasks.push(task);
    }
}

/// Insert at `index`, appending when the list has shrunk below it
pub fn insert_at(tasks: &mut Vec<Task>, index: usize, task: Task) {
    let index = index.min(tasks.len());
    tasks.insert(index, task);
}
