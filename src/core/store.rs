//! core::store
//!
//! In-memory task storage.
//!
//! # Design
//!
//! The store owns an ordered `Vec<Task>` and is the only place tasks are
//! created or mutated. Insertion order is preserved everywhere it is
//! observable. Every mutating operation validates its inputs before
//! touching the collection, so a failed call leaves the store exactly as
//! it was.
//!
//! Identifiers come from a monotone counter that starts at 1 and only moves
//! forward, so an id freed by a delete is never handed out again within a
//! session. While nothing has been deleted this matches "one greater than
//! the current maximum".

use thiserror::Error;

use crate::core::types::{Description, InvalidInput, Task, TaskId, Title};

/// Errors from store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("task with id {0} does not exist")]
    NotFound(TaskId),
}

/// The in-memory collection owning all tasks for one session.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::first(),
        }
    }
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new pending task, returning its id.
    ///
    /// The title is trimmed and validated; an empty description is still a
    /// description (callers map "not provided" to `None`).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the title or description
    /// fails validation. The store is unchanged on error.
    pub fn add(&mut self, title: &str, description: Option<&str>) -> Result<TaskId, StoreError> {
        let title = Title::new(title)?;
        let description = description.map(Description::new).transpose()?;

        let id = self.next_id;
        self.tasks.push(Task::new(id, title, description));
        self.next_id = id.next();
        Ok(id)
    }

    /// Snapshot of all tasks in insertion order.
    ///
    /// The returned tasks are clones; mutating them does not affect the
    /// store.
    pub fn list_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Look up a task by id.
    ///
    /// Not-found is an expected outcome here, not an error.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Update a task's title and/or description.
    ///
    /// Fields passed as `None` are left untouched, as is the completion
    /// flag. Passing both as `None` is a no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no task has the id, or
    /// `StoreError::InvalidInput` if a provided field fails validation.
    /// Both fields are validated before either is assigned.
    pub fn update(
        &mut self,
        id: TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), StoreError> {
        // Validate everything up front so a bad description can't leave a
        // half-applied update behind.
        let title = title.map(Title::new).transpose()?;
        let description = description.map(Description::new).transpose()?;

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = description {
            task.description = Some(description);
        }
        Ok(())
    }

    /// Remove a task permanently.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no task has the id.
    pub fn delete(&mut self, id: TaskId) -> Result<(), StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);
        Ok(())
    }

    /// Flip a task's completion flag, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no task has the id.
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// All completed tasks, insertion order preserved.
    pub fn completed(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.completed)
            .cloned()
            .collect()
    }

    /// All pending tasks, insertion order preserved.
    pub fn pending(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| !task.completed)
            .cloned()
            .collect()
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
