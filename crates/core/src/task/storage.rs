//! Task storage trait
//!
//! Defines the load/save interface the task service runs its
//! read-modify-write cycle against.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Whole-collection persistence for tasks
#[async_trait]
pub trait TaskStorage: Send + Sync {
    /// Load the full, ordered collection. A store that holds nothing yet
    /// returns an empty collection.
    async fn load(&self) -> Result<Vec<Task>>;

    /// Replace the stored collection with `tasks`
    async fn save(&self, tasks: &[Task]) -> Result<()>;
}
