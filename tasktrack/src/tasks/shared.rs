//! Lock-guarded handle to a [`TaskManager`] for multi-threaded callers.

use std::sync::Arc;

use parking_lot::Mutex;
use tasktrack_core::{Priority, Task, TaskId, TaskStatus, ValidationError};

use super::TaskManager;

/// Cloneable handle that serializes every operation through one mutex.
///
/// Each method holds the lock for exactly one manager operation and hands
/// back owned values, so no reference into the collection outlives the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedTaskManager {
    inner: Arc<Mutex<TaskManager>>,
}

impl SharedTaskManager {
    /// Wraps an existing manager.
    #[must_use]
    pub fn new(manager: TaskManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn add(&self, task: Task) {
        self.inner.lock().add(task);
    }

    pub fn remove(&self, id: &TaskId) -> bool {
        self.inner.lock().remove(id)
    }

    #[must_use]
    pub fn find_by_id(&self, id: &TaskId) -> Option<Task> {
        self.inner.lock().find_by_id(id).cloned()
    }

    /// Runs `f` against the stored task while the lock is held.
    ///
    /// Returns `None` if no task has that id, otherwise the closure's result.
    pub fn update<T>(
        &self,
        id: &TaskId,
        f: impl FnOnce(&mut Task) -> Result<T, ValidationError>,
    ) -> Option<Result<T, ValidationError>> {
        let mut manager = self.inner.lock();
        let task = manager.find_by_id_mut(id)?;
        let result = f(task);
        if let Err(e) = &result {
            tracing::warn!(task_id = %id, error = %e, "task update rejected");
        }
        Some(result)
    }

    #[must_use]
    pub fn list_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.inner.lock().list_by_status(status)
    }

    #[must_use]
    pub fn list_by_priority(&self, priority: Priority) -> Vec<Task> {
        self.inner.lock().list_by_priority(priority)
    }

    #[must_use]
    pub fn list_all(&self) -> Vec<Task> {
        self.inner.lock().list_all()
    }

    #[must_use]
    pub fn list_overdue(&self) -> Vec<Task> {
        self.inner.lock().list_overdue()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
