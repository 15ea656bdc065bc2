//! In-memory task storage

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::Task;
use super::storage::TaskStorage;
use crate::Result;

/// Task storage that keeps the collection in process memory
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

#[async_trait]
impl TaskStorage for MemoryTaskStore {
    async fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.tasks.write().await = tasks.to_vec();
        Ok(())
    }
}
