//! Mutation State Machine
//!
//! One `Mutation` per user action:
//! `Idle -> Applied -> {Confirmed | RolledBack | Superseded}`.
//! The rollback value is captured when the optimistic change is applied
//! and dropped on every exit from `Applied`.

use std::collections::{BTreeMap, HashMap};

use super::TaskStore;
use crate::domain::{find_task, insert_at, Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    Idle,
    /// Local change applied, request in flight
    Applied,
    /// Server accepted; its answer replaced the optimistic entry
    Confirmed,
    /// Server refused; pre-mutation values restored
    RolledBack,
    /// A newer mutation of the same task took over; response ignored
    Superseded,
}

/// How a controller operation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Confirmed,
    RolledBack,
    Superseded,
    /// A non-optimistic request failed; nothing was changed
    Failed,
    /// Stopped locally before any request was sent
    Rejected,
    /// Nothing to do
    Unchanged,
}

impl From<MutationState> for Outcome {
    fn from(state: MutationState) -> Self {
        match state {
            MutationState::Confirmed => Outcome::Confirmed,
            MutationState::RolledBack => Outcome::RolledBack,
            MutationState::Superseded => Outcome::Superseded,
            MutationState::Idle | MutationState::Applied => Outcome::Unchanged,
        }
    }
}

/// What to write back if the request fails
#[derive(Debug, Clone, PartialEq)]
pub enum Rollback {
    /// The whole list as it was before the change
    Collection(Vec<Task>),
    /// Only a task's completion flag
    Completed { id: TaskId, completed: bool },
    /// A removed task and where it was
    Reinsert { index: usize, task: Task },
}

impl Rollback {
    pub fn restore(self, tasks: &mut Vec<Task>) {
        match self {
            Rollback::Collection(snapshot) => *tasks = snapshot,
            Rollback::Completed { id, completed } => {
                if let Some(index) = find_task(tasks, id) {
                    tasks[index].completed = completed;
                }
            }
            Rollback::Reinsert { index, task } => {
                let present = task.id.is_some_and(|id| find_task(tasks, id).is_some());
                if !present {
                    insert_at(tasks, index, task);
                }
            }
        }
    }
}

/// Where a task goes back to when its newest pending mutation fails
pub enum Fallback {
    /// Undo values captured by an older mutation that failed
    Restore(Rollback),
    /// Server answer for an older mutation that was accepted
    Commit(Box<dyn FnOnce(&mut Vec<Task>)>),
}

impl Fallback {
    fn apply(self, tasks: &mut Vec<Task>) {
        match self {
            Fallback::Restore(rollback) => rollback.restore(tasks),
            Fallback::Commit(commit) => commit(tasks),
        }
    }
}

/// Identifies one in-flight mutation of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub id: TaskId,
    seq: u64,
}

/// Where a settling mutation stood among those pending for its task
pub enum Standing {
    /// No newer mutation is pending; carries any fallback handed to it
    Newest(Option<Fallback>),
    /// A newer mutation is still pending
    Older(Option<Fallback>),
    /// A newer mutation was already confirmed
    Stale,
}

/// Pending mutations per task, oldest first.
///
/// Each entry may hold a fallback handed over by an older mutation that
/// settled while it was pending. A confirmed response makes every older
/// request of the same task stale.
#[derive(Default)]
pub struct InFlight {
    pending: HashMap<TaskId, BTreeMap<u64, Option<Fallback>>>,
    next_seq: u64,
}

impl InFlight {
    pub fn begin(&mut self, id: TaskId) -> Token {
        self.next_seq += 1;
        self.pending.entry(id).or_default().insert(self.next_seq, None);
        Token { id, seq: self.next_seq }
    }

    /// Whether `token` is the newest pending mutation of its task
    pub fn is_current(&self, token: Token) -> bool {
        self.pending
            .get(&token.id)
            .and_then(|pending| pending.keys().next_back())
            == Some(&token.seq)
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Release a token and report where it stood
    pub fn finish(&mut self, token: Token) -> Standing {
        let Some(pending) = self.pending.get_mut(&token.id) else {
            return Standing::Stale;
        };
        let Some(handed) = pending.remove(&token.seq) else {
            return Standing::Stale;
        };
        let newer = pending.range(token.seq + 1..).next().is_some();
        if pending.is_empty() {
            self.pending.remove(&token.id);
        }
        if newer {
            Standing::Older(handed)
        } else {
            Standing::Newest(handed)
        }
    }

    /// Pass a fallback to the next newer pending mutation of the task
    pub fn hand_over(&mut self, token: Token, fallback: Fallback) {
        let next = self
            .pending
            .get_mut(&token.id)
            .and_then(|pending| pending.range_mut(token.seq + 1..).next());
        if let Some((_, slot)) = next {
            *slot = Some(fallback);
        }
    }

    /// Make every request older than `token` stale
    pub fn retire_older(&mut self, token: Token) {
        if let Some(pending) = self.pending.get_mut(&token.id) {
            pending.retain(|seq, _| *seq > token.seq);
            if pending.is_empty() {
                self.pending.remove(&token.id);
            }
        }
    }
}

/// One optimistic change against a store
pub struct Mutation<S: TaskStore> {
    store: S,
    rollback: Option<Rollback>,
    state: MutationState,
}

impl<S: TaskStore> Mutation<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            rollback: None,
            state: MutationState::Idle,
        }
    }

    pub fn state(&self) -> MutationState {
        self.state
    }

    /// Apply the optimistic change; `change` returns how to undo it
    pub fn apply(&mut self, change: impl FnOnce(&mut Vec<Task>) -> Rollback) {
        if self.state != MutationState::Idle {
            return;
        }
        self.rollback = Some(self.store.modify(change));
        self.state = MutationState::Applied;
    }

    /// Write the authoritative result and forget the rollback
    pub fn confirm(&mut self, commit: impl FnOnce(&mut Vec<Task>)) -> MutationState {
        if self.state == MutationState::Applied {
            self.store.modify(commit);
            self.rollback = None;
            self.state = MutationState::Confirmed;
        }
        self.state
    }

    pub fn roll_back(&mut self) -> MutationState {
        self.fall_back(None)
    }

    /// Roll back to `fallback` when one was handed over, else to this
    /// mutation's own snapshot
    pub fn fall_back(&mut self, fallback: Option<Fallback>) -> MutationState {
        if self.state == MutationState::Applied {
            let rollback = self.rollback.take();
            self.store.modify(|tasks| match (fallback, rollback) {
                (Some(fallback), _) => fallback.apply(tasks),
                (None, Some(rollback)) => rollback.restore(tasks),
                (None, None) => {}
            });
            self.state = MutationState::RolledBack;
        }
        self.state
    }

    /// Leave the store alone; a newer mutation owns it now
    pub fn supersede(&mut self) -> MutationState {
        self.hand_off();
        self.state
    }

    /// Supersede and give up the undo values for a newer mutation to use
    pub fn hand_off(&mut self) -> Option<Rollback> {
        if self.state != MutationState::Applied {
            return None;
        }
        self.state = MutationState::Superseded;
        self.rollback.take()
    }
}
