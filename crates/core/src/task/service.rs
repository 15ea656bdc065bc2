//! Task service
//!
//! Implements the create / list / get / update / patch / delete operations
//! on top of a [`TaskStorage`]. Every mutation is one read-modify-write
//! cycle: load the whole collection, change it in memory, save it back.

use std::sync::Arc;
use tokio::sync::Mutex;

use super::model::{NewTask, Task};
use super::patch::TaskPatch;
use super::storage::TaskStorage;
use crate::{Error, Result};

/// Validation rules for updates that callers can tune
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdatePolicy {
    /// Reject a partial update that carries none of the mutable fields
    pub require_fields_on_patch: bool,
}

/// Task operations over a shared storage backend
pub struct TaskService {
    storage: Arc<dyn TaskStorage>,
    /// Serializes read-modify-write cycles so concurrent writers cannot
    /// overwrite each other's changes.
    write_lock: Mutex<()>,
    policy: UpdatePolicy,
}

impl TaskService {
    pub fn new(storage: Arc<dyn TaskStorage>) -> Self {
        Self::with_policy(storage, UpdatePolicy::default())
    }

    pub fn with_policy(storage: Arc<dyn TaskStorage>, policy: UpdatePolicy) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
            policy,
        }
    }

    /// Create a task and append it to the collection
    pub async fn create(&self, new_task: NewTask) -> Result<Task> {
        let title = match new_task.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(Error::validation("Title is required")),
        };

        let mut task = Task::new(title);
        if let Some(description) = new_task.description {
            task = task.with_description(description);
        }

        let _guard = self.write_lock.lock().await;
        let mut tasks = self.storage.load().await?;
        tasks.push(task.clone());
        self.storage.save(&tasks).await?;

        tracing::info!("Created task {}", task.id);
        Ok(task)
    }

    /// All tasks in insertion order
    pub async fn list(&self) -> Result<Vec<Task>> {
        self.storage.load().await
    }

    pub async fn get(&self, id: &str) -> Result<Task> {
        self.storage
            .load()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))
    }

    /// Full update: at least one field must be present
    pub async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task> {
        self.merge(id, patch, true).await
    }

    /// Partial update: an empty patch is accepted unless the policy says otherwise
    pub async fn patch(&self, id: &str, patch: TaskPatch) -> Result<Task> {
        self.merge(id, patch, self.policy.require_fields_on_patch)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.storage.load().await?;
        let index = position(&tasks, id)?;

        tasks.remove(index);
        self.storage.save(&tasks).await?;

        tracing::info!("Deleted task {}", id);
        Ok(())
    }

    async fn merge(&self, id: &str, patch: TaskPatch, require_fields: bool) -> Result<Task> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.storage.load().await?;
        // Unknown ids win over validation failures
        let index = position(&tasks, id)?;

        if require_fields && patch.is_empty() {
            return Err(Error::validation(
                "At least one field (title, description, completed) is required",
            ));
        }

        let task = &mut tasks[index];
        patch.apply(task)?;
        let updated = task.clone();

        self.storage.save(&tasks).await?;
        tracing::debug!("Updated task {}: {:?}", id, patch);
        Ok(updated)
    }
}

fn position(tasks: &[Task], id: &str) -> Result<usize> {
    tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| Error::TaskNotFound(id.to_string()))
}
