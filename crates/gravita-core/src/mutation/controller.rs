//! Mutation Controller
//!
//! Applies user intent to the local task list, calls the backend and
//! settles each mutation. Toggle, edit, reposition and delete are
//! optimistic; create and the recycle-bin operations wait for the server.
//! Each failure produces exactly one error notice; nothing is retried.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::state::{Fallback, InFlight, Mutation, Outcome, Rollback, Standing, Token};
use super::{Notice, Notifier, TaskStore, TodoApi};
use crate::domain::{
    find_task, remove_task, replace_task, upsert_task, Task, TaskDraft, TaskId, TaskPatch,
};
use crate::error::{TodoError, TodoResult};
use crate::priority::estimate_priority;
use crate::settings::MutationConfig;
use crate::validation;
use crate::wire::{DeleteReceipt, OperationSource};

pub struct MutationController<A, S, N> {
    api: Rc<A>,
    tasks: S,
    recycled: S,
    notifier: N,
    config: Rc<Cell<MutationConfig>>,
    in_flight: Rc<RefCell<InFlight>>,
}

impl<A, S: Clone, N: Clone> Clone for MutationController<A, S, N> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            tasks: self.tasks.clone(),
            recycled: self.recycled.clone(),
            notifier: self.notifier.clone(),
            config: Rc::clone(&self.config),
            in_flight: Rc::clone(&self.in_flight),
        }
    }
}

impl<A, S, N> MutationController<A, S, N>
where
    A: TodoApi,
    S: TaskStore,
    N: Notifier,
{
    /// `tasks` is the active list, `recycled` the recycle-bin view
    pub fn new(api: Rc<A>, tasks: S, recycled: S, notifier: N, config: MutationConfig) -> Self {
        Self {
            api,
            tasks,
            recycled,
            notifier,
            config: Rc::new(Cell::new(config)),
            in_flight: Rc::new(RefCell::new(InFlight::default())),
        }
    }

    pub fn config(&self) -> MutationConfig {
        self.config.get()
    }

    /// Takes effect for mutations started afterwards
    pub fn set_config(&self, config: MutationConfig) {
        self.config.set(config);
    }

    pub fn tasks(&self) -> &S {
        &self.tasks
    }

    pub fn recycled(&self) -> &S {
        &self.recycled
    }

    /// Whether an optimistic mutation of `id` awaits its response
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.in_flight.borrow().is_pending(id)
    }

    // ========================
    // Notices
    // ========================

    fn fail(&self, context: &str, err: &TodoError) {
        log::warn!("{}: {}", context, err);
        self.notifier.notify(Notice::error(format!("{}: {}", context, err)));
    }

    fn succeed(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::success(message));
    }

    fn reject(&self, context: &str, err: TodoError) -> Outcome {
        self.fail(context, &err);
        Outcome::Rejected
    }

    // ========================
    // Settling
    // ========================

    fn begin(&self, id: TaskId) -> Token {
        self.in_flight.borrow_mut().begin(id)
    }

    /// Resolve an optimistic mutation against its response.
    /// Returns the response value only when it was applied.
    ///
    /// Only the newest pending mutation of a task writes to the store.
    /// An older one that settles first hands its outcome to the next newer
    /// mutation: a failure passes on its undo values, a success passes on
    /// the server's answer. Either way a later failure falls back to the
    /// last state the server actually holds.
    fn settle<T: 'static>(
        &self,
        token: Token,
        mut mutation: Mutation<S>,
        result: TodoResult<T>,
        context: &str,
        commit: impl FnOnce(&mut Vec<Task>, &T) + 'static,
    ) -> (Outcome, Option<T>) {
        let standing = self.in_flight.borrow_mut().finish(token);

        match (standing, result) {
            (Standing::Newest(_), Ok(value)) => {
                let state = mutation.confirm(|tasks| commit(tasks, &value));
                self.in_flight.borrow_mut().retire_older(token);
                log::debug!("task {} mutation confirmed", token.id);
                (state.into(), Some(value))
            }
            (Standing::Newest(handed), Err(err)) => {
                self.fail(context, &err);
                (mutation.fall_back(handed).into(), None)
            }
            (Standing::Older(_), Ok(value)) => {
                log::debug!("task {} accepted while newer change pending", token.id);
                let mut in_flight = self.in_flight.borrow_mut();
                in_flight.retire_older(token);
                let accepted = move |tasks: &mut Vec<Task>| commit(tasks, &value);
                in_flight.hand_over(token, Fallback::Commit(Box::new(accepted)));
                mutation.hand_off();
                (Outcome::Superseded, None)
            }
            (Standing::Older(handed), Err(err)) => {
                self.fail(context, &err);
                let fallback = handed.or_else(|| mutation.hand_off().map(Fallback::Restore));
                mutation.hand_off();
                if let Some(fallback) = fallback {
                    self.in_flight.borrow_mut().hand_over(token, fallback);
                }
                (Outcome::Superseded, None)
            }
            (Standing::Stale, result) => {
                if let Err(err) = result {
                    self.fail(context, &err);
                }
                log::debug!("task {} response superseded, discarding", token.id);
                (mutation.supersede().into(), None)
            }
        }
    }

    fn file_in_bin(&self, receipt: DeleteReceipt) {
        if let Some(task) = receipt.todo {
            self.recycled.modify(|bin| upsert_task(bin, task));
        }
    }

    // ========================
    // Loading
    // ========================

    /// Replace the active list with the server's
    pub async fn load_tasks(&self) -> Outcome {
        match self.api.list_todos().await {
            Ok(tasks) => {
                log::debug!("loaded {} tasks", tasks.len());
                self.tasks.replace(tasks);
                Outcome::Confirmed
            }
            Err(err) => {
                self.fail("Failed to load tasks", &err);
                Outcome::Failed
            }
        }
    }

    pub async fn load_recycle_bin(&self) -> Outcome {
        match self.api.list_recycle_bin().await {
            Ok(tasks) => {
                self.recycled.replace(tasks);
                Outcome::Confirmed
            }
            Err(err) => {
                self.fail("Failed to load recycle bin", &err);
                Outcome::Failed
            }
        }
    }

    // ========================
    // Active list
    // ========================

    /// Validate and create; the task is appended once the server answers
    pub async fn create(&self, draft: TaskDraft) -> Outcome {
        const CONTEXT: &str = "Failed to add task";
        if let Err(err) = validation::validate(&draft) {
            return self.reject(CONTEXT, err.into());
        }

        match self.api.create_todo(&draft).await {
            Ok(task) => {
                self.tasks.modify(|tasks| tasks.push(task));
                self.succeed("Task added");
                Outcome::Confirmed
            }
            Err(err) => {
                self.fail(CONTEXT, &err);
                Outcome::Failed
            }
        }
    }

    /// Flip `completed` immediately, then confirm with the server.
    ///
    /// With auto-trash on, completing a task deletes it to the recycle bin
    /// instead; if that fails only the flag is put back.
    pub async fn toggle_complete(&self, id: TaskId) -> Outcome {
        const CONTEXT: &str = "Failed to update status";
        let Some(prior) = self.tasks.get(id).map(|task| task.completed) else {
            return self.reject(CONTEXT, TodoError::NotFound(id));
        };
        let completed = !prior;

        let token = self.begin(id);
        let mut mutation = Mutation::new(self.tasks.clone());
        mutation.apply(|tasks| {
            if let Some(index) = find_task(tasks, id) {
                tasks[index].completed = completed;
            }
            Rollback::Completed { id, completed: prior }
        });

        if completed && self.config().auto_trash {
            let result = self.api.delete_todo(id).await;
            let (outcome, receipt) =
                self.settle(token, mutation, result, "Failed to complete task", move |tasks, _| {
                    remove_task(tasks, id);
                });
            if let Some(receipt) = receipt {
                self.file_in_bin(receipt);
                self.succeed("Completed and moved to the recycle bin");
            }
            return outcome;
        }

        let result = self.api.toggle_todo(id).await;
        let (outcome, _) = self.settle(token, mutation, result, CONTEXT, |tasks, task| {
            replace_task(tasks, task.clone());
        });
        outcome
    }

    /// Save an edit form
    pub async fn edit(&self, id: TaskId, draft: TaskDraft) -> Outcome {
        const CONTEXT: &str = "Failed to update task";
        if let Err(err) = validation::validate(&draft) {
            return self.reject(CONTEXT, err.into());
        }
        let patch = TaskPatch::from_draft(&draft, OperationSource::Editor);
        let outcome = self.patch(id, patch, None, CONTEXT).await;
        if outcome == Outcome::Confirmed {
            self.succeed("Task updated");
        }
        outcome
    }

    /// Move a task on the quadrant board; a drop on its current scores is
    /// a no-op
    pub async fn reposition(&self, id: TaskId, importance: i32, urgency: i32) -> Outcome {
        const CONTEXT: &str = "Failed to move task";
        let Some(mut moved) = self.tasks.get(id) else {
            return self.reject(CONTEXT, TodoError::NotFound(id));
        };
        if moved.scores() == Some((importance, urgency)) {
            return Outcome::Unchanged;
        }
        let preview = match estimate_priority(importance, urgency) {
            Ok(priority) => priority,
            Err(err) => return self.reject(CONTEXT, err.into()),
        };

        moved.importance_score = Some(importance);
        moved.urgency_score = Some(urgency);
        let patch = TaskPatch::from_task(&moved, OperationSource::Quadrant);
        self.patch(id, patch, Some(preview), CONTEXT).await
    }

    async fn patch(
        &self,
        id: TaskId,
        patch: TaskPatch,
        preview_priority: Option<i32>,
        context: &str,
    ) -> Outcome {
        if self.tasks.get(id).is_none() {
            return self.reject(context, TodoError::NotFound(id));
        }

        let token = self.begin(id);
        let mut mutation = Mutation::new(self.tasks.clone());
        mutation.apply(|tasks| {
            let snapshot = tasks.clone();
            if let Some(index) = find_task(tasks, id) {
                patch.apply_to(&mut tasks[index]);
                if preview_priority.is_some() {
                    tasks[index].final_priority = preview_priority;
                }
            }
            Rollback::Collection(snapshot)
        });

        let result = self.api.update_todo(id, &patch).await;
        let (outcome, _) = self.settle(token, mutation, result, context, |tasks, task| {
            replace_task(tasks, task.clone());
        });
        outcome
    }

    /// Remove from the active list right away; put it back if the server
    /// refuses
    pub async fn delete(&self, id: TaskId) -> Outcome {
        const CONTEXT: &str = "Failed to delete task";
        if self.tasks.get(id).is_none() {
            return self.reject(CONTEXT, TodoError::NotFound(id));
        }

        let token = self.begin(id);
        let mut mutation = Mutation::new(self.tasks.clone());
        mutation.apply(|tasks| {
            let snapshot = tasks.clone();
            match remove_task(tasks, id) {
                Some((index, task)) => Rollback::Reinsert { index, task },
                None => Rollback::Collection(snapshot),
            }
        });

        let result = self.api.delete_todo(id).await;
        let (outcome, receipt) = self.settle(token, mutation, result, CONTEXT, |_, _| {});
        if let Some(receipt) = receipt {
            self.file_in_bin(receipt);
            self.succeed("Moved to the recycle bin");
        }
        outcome
    }

    // ========================
    // Recycle bin
    // ========================

    /// Bring a recycled task back once the server confirms
    pub async fn restore(&self, task: &Task) -> Outcome {
        const CONTEXT: &str = "Failed to restore task";
        let id = match task.require_id("restore") {
            Ok(id) => id,
            Err(err) => return self.reject(CONTEXT, err),
        };

        match self.api.restore_todo(id).await {
            Ok(restored) => {
                self.recycled.modify(|bin| remove_task(bin, id));
                self.tasks.modify(|tasks| upsert_task(tasks, restored));
                self.succeed("Task restored");
                Outcome::Confirmed
            }
            Err(err) => {
                self.fail(CONTEXT, &err);
                Outcome::Failed
            }
        }
    }

    /// Restore several tasks in one request; all or nothing locally
    pub async fn batch_restore(&self, ids: &[TaskId]) -> Outcome {
        if ids.is_empty() {
            return Outcome::Unchanged;
        }

        match self.api.batch_restore(ids).await {
            Ok(response) => {
                let count = response.restored_todos.len();
                let restored: Vec<TaskId> =
                    response.restored_todos.iter().filter_map(|task| task.id).collect();
                self.recycled.modify(|bin| {
                    bin.retain(|task| !task.id.is_some_and(|id| restored.contains(&id)));
                });
                self.tasks.modify(|tasks| {
                    for task in response.restored_todos {
                        upsert_task(tasks, task);
                    }
                });
                let message = if response.message.is_empty() {
                    format!("Restored {} tasks", count)
                } else {
                    response.message
                };
                self.succeed(message);
                Outcome::Confirmed
            }
            Err(err) => {
                self.fail("Failed to restore tasks", &err);
                Outcome::Failed
            }
        }
    }

    /// Delete a recycled task for good
    pub async fn purge(&self, id: TaskId) -> Outcome {
        match self.api.purge_todo(id).await {
            Ok(_) => {
                self.recycled.modify(|bin| remove_task(bin, id));
                self.succeed("Deleted permanently");
                Outcome::Confirmed
            }
            Err(err) => {
                self.fail("Failed to delete permanently", &err);
                Outcome::Failed
            }
        }
    }

    pub async fn clear_recycle_bin(&self) -> Outcome {
        match self.api.clear_recycle_bin().await {
            Ok(_) => {
                self.recycled.replace(Vec::new());
                self.succeed("Recycle bin emptied");
                Outcome::Confirmed
            }
            Err(err) => {
                self.fail("Failed to empty recycle bin", &err);
                Outcome::Failed
            }
        }
    }
}
