//! Board Views
//!
//! Partitioning of the active collection for the quadrant board, list
//! filters and header statistics.

use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// Where a task shows up on the quadrant screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardSlot {
    /// Missing at least one score: waits in the staging stack
    Unassigned,
    /// Both scores, still open: drawn on the canvas
    Visible,
    /// Both scores but completed: not drawn
    Hidden,
}

/// Disjoint split of a task list by [`BoardSlot`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardPartition {
    /// Newest first
    pub unassigned: Vec<Task>,
    pub visible: Vec<Task>,
    pub hidden: Vec<Task>,
}

pub fn partition(tasks: &[Task]) -> BoardPartition {
    let mut board = BoardPartition::default();
    for task in tasks {
        match task.board_slot() {
            BoardSlot::Unassigned => board.unassigned.push(task.clone()),
            BoardSlot::Visible => board.visible.push(task.clone()),
            BoardSlot::Hidden => board.hidden.push(task.clone()),
        }
    }
    board.unassigned.sort_by(|a, b| b.id.cmp(&a.id));
    board
}

/// List filter options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub has_time_range: bool,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if self.completed.is_some_and(|completed| completed != task.completed) {
            return false;
        }
        !self.has_time_range || task.has_time_range()
    }
}

pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

/// Header counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub recycle_bin: usize,
}

impl TaskStats {
    pub fn collect(active: &[Task], recycled: &[Task]) -> Self {
        let completed = active.iter().filter(|task| task.completed).count();
        Self {
            total: active.len(),
            completed,
            pending: active.len() - completed,
            recycle_bin: recycled.len(),
        }
    }
}
