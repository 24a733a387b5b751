//! Task store — the authoritative task collection and its persistence.
//!
//! The store owns the in-memory collection, mediates every mutation, and
//! mirrors the full collection to one blob under a fixed key after each
//! change. All reads used by the presentation layer (list, calendar,
//! statistics) are derived from the snapshot this store exposes.

pub mod seed;

use thiserror::Error;
use tracing::warn;

use crate::context::ServiceContext;
use crate::ports::blob::BlobError;
use crate::task::{NewTask, Task, TaskPatch, TaskStats, TaskStatus};

/// Fixed blob key the task collection is persisted under.
///
/// Kept identical to the key used by earlier versions of the application so
/// existing data survives an upgrade.
pub const STORAGE_KEY: &str = "student-tasks";

/// Error returned by mutating store operations.
///
/// A failed mutation never changes in-memory state: the collection stays
/// consistent with the last successfully persisted snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The task collection could not be serialized for persistence.
    #[error("failed to serialize task collection: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The blob store rejected the write.
    #[error("failed to persist task collection: {0}")]
    Persist(#[source] BlobError),
}

/// Owns the authoritative in-memory task collection.
///
/// Every mutation is a full-collection read-modify-write against the blob
/// store: the candidate collection is serialized and written first, and the
/// in-memory state is replaced only once the write succeeded. Callers can
/// therefore never observe a mutation that was not persisted.
pub struct TaskStore {
    ctx: ServiceContext,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Opens the store, loading the persisted collection.
    ///
    /// A missing blob installs the built-in sample dataset and persists it
    /// immediately; a corrupt or unreadable blob falls back to the sample
    /// dataset without overwriting whatever is stored. Neither case is an
    /// error for the caller.
    #[must_use]
    pub fn open(ctx: ServiceContext) -> Self {
        let tasks = match ctx.blobs.load(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(error = %err, "stored task blob is corrupt, using sample data");
                    seed::sample_tasks(ctx.clock.now())
                }
            },
            Ok(None) => {
                let tasks = seed::sample_tasks(ctx.clock.now());
                if let Err(err) = persist(&ctx, &tasks) {
                    warn!(error = %err, "failed to persist initial sample data");
                }
                tasks
            }
            Err(err) => {
                warn!(error = %err, "failed to load task blob, using sample data");
                seed::sample_tasks(ctx.clock.now())
            }
        };
        Self { ctx, tasks }
    }

    /// Read-only ordered snapshot of the collection.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Creates a task from `new`, assigning its id and timestamps.
    ///
    /// Returns the assigned id. Duplicate titles are allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated collection cannot be persisted; the
    /// task is not added in that case.
    pub fn add_task(&mut self, new: NewTask) -> Result<String, StoreError> {
        let now = self.ctx.clock.now();
        let id = self.ctx.id_gen.generate_id();
        let completed_at = (new.status == TaskStatus::Completed).then_some(now);
        let task = Task {
            id: id.clone(),
            title: new.title,
            description: new.description,
            category: new.category,
            priority: new.priority,
            status: new.status,
            due_date: new.due_date,
            estimated_time: new.estimated_time,
            actual_time: new.actual_time,
            created_at: now,
            updated_at: now,
            completed_at,
        };

        let mut next = self.tasks.clone();
        next.push(task);
        self.commit(next)?;
        Ok(id)
    }

    /// Applies a partial update to the task with the given id.
    ///
    /// Refreshes `updated_at` and reconciles `completed_at` with the new
    /// status: entering `Completed` without an explicit timestamp stamps
    /// "now", and leaving `Completed` clears it. An unknown id leaves the
    /// collection unchanged (the blob is still rewritten).
    ///
    /// # Errors
    ///
    /// Returns an error if the updated collection cannot be persisted; the
    /// update is not applied in that case.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<(), StoreError> {
        let now = self.ctx.clock.now();
        let mut next = self.tasks.clone();
        if let Some(task) = next.iter_mut().find(|t| t.id == id) {
            apply_patch(task, patch, now);
        }
        self.commit(next)
    }

    /// Removes the task with the given id; absent ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated collection cannot be persisted; the
    /// task is not removed in that case.
    pub fn delete_task(&mut self, id: &str) -> Result<(), StoreError> {
        let mut next = self.tasks.clone();
        next.retain(|t| t.id != id);
        self.commit(next)
    }

    /// Marks the task completed, stamping `completed_at` with "now".
    ///
    /// # Errors
    ///
    /// Returns an error if the updated collection cannot be persisted.
    pub fn mark_completed(&mut self, id: &str) -> Result<(), StoreError> {
        let now = self.ctx.clock.now();
        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            completed_at: Some(now),
            ..TaskPatch::default()
        };
        self.update_task(id, patch)
    }

    /// Computes aggregate statistics over the collection. Pure; does not
    /// mutate or persist.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::compute(&self.tasks, self.ctx.clock.now())
    }

    /// Persists `next` and, only on success, makes it the live collection.
    fn commit(&mut self, next: Vec<Task>) -> Result<(), StoreError> {
        match persist(&self.ctx, &next) {
            Ok(()) => {
                self.tasks = next;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to persist task collection, mutation dropped");
                Err(err)
            }
        }
    }
}

fn persist(ctx: &ServiceContext, tasks: &[Task]) -> Result<(), StoreError> {
    let json = serde_json::to_string(tasks)?;
    ctx.blobs.save(STORAGE_KEY, &json).map_err(StoreError::Persist)
}

fn apply_patch(task: &mut Task, patch: TaskPatch, now: chrono::DateTime<chrono::Utc>) {
    if let Some(title) = patch.title {
        task.title = title;
    }
    if let Some(description) = patch.description {
        task.description = Some(description);
    }
    if let Some(category) = patch.category {
        task.category = category;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(status) = patch.status {
        task.status = status;
    }
    if let Some(due_date) = patch.due_date {
        task.due_date = Some(due_date);
    }
    if let Some(estimated_time) = patch.estimated_time {
        task.estimated_time = Some(estimated_time);
    }
    if let Some(actual_time) = patch.actual_time {
        task.actual_time = Some(actual_time);
    }
    if let Some(completed_at) = patch.completed_at {
        task.completed_at = Some(completed_at);
    }
    task.updated_at = now;

    // Keep completed_at in lockstep with status: a task moved back out of
    // completed must not keep a stale completion timestamp.
    match task.status {
        TaskStatus::Completed => {
            if task.completed_at.is_none() {
                task.completed_at = Some(now);
            }
        }
        TaskStatus::Todo | TaskStatus::InProgress => task.completed_at = None,
    }
}
