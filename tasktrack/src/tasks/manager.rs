//! Task manager for CRUD and filter operations over one task collection.

use chrono::{Local, NaiveDateTime};
use tasktrack_core::{Priority, Task, TaskId, TaskStatus};

/// Owns an ordered collection of tasks.
///
/// Iteration follows insertion order. Listing methods return cloned
/// snapshots, so callers can reorder or drop entries without touching the
/// manager's storage.
#[derive(Debug, Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
}

impl TaskManager {
    /// Creates an empty manager.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a task. Ids are unique by construction, so no duplicate check is made.
    pub fn add(&mut self, task: Task) {
        tracing::debug!(task_id = %task.id(), priority = %task.priority(), "task added");
        self.tasks.push(task);
    }

    /// Removes the task with the given id.
    ///
    /// Returns `false` if no task matched; that is not an error.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != *id);
        let removed = self.tasks.len() != before;
        tracing::debug!(task_id = %id, removed, "task remove requested");
        removed
    }

    #[must_use]
    pub fn find_by_id(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == *id)
    }

    /// Returns a mutable reference so callers can apply validated setters.
    pub fn find_by_id_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == *id)
    }

    /// Returns every task with the given status, in collection order.
    #[must_use]
    pub fn list_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.snapshot(|task| task.status() == status)
    }

    /// Returns every task with the given priority, in collection order.
    #[must_use]
    pub fn list_by_priority(&self, priority: Priority) -> Vec<Task> {
        self.snapshot(|task| task.priority() == priority)
    }

    #[must_use]
    pub fn list_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns tasks whose due date has passed, using the local clock.
    #[must_use]
    pub fn list_overdue(&self) -> Vec<Task> {
        self.list_overdue_at(Local::now().naive_local())
    }

    /// Returns tasks whose due date is strictly before `now`.
    #[must_use]
    pub fn list_overdue_at(&self, now: NaiveDateTime) -> Vec<Task> {
        self.snapshot(|task| task.is_overdue_at(now))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn snapshot(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| predicate(task))
            .cloned()
            .collect()
    }
}
