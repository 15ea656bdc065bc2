//! Application state

use std::path::{Path, PathBuf};
use std::sync::Arc;

use todo_core::task::{FileTaskStore, TaskService, TaskStorage, UpdatePolicy};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    tasks: TaskService,
    data_file: PathBuf,
}

impl AppState {
    /// Create an AppState backed by the configured JSON file
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(FileTaskStore::new(&config.data_file));
        let policy = UpdatePolicy {
            require_fields_on_patch: config.patch_requires_field,
        };
        Self::with_storage(store, policy, config.data_file.clone())
    }

    /// Create an AppState over any storage backend
    pub fn with_storage(
        storage: Arc<dyn TaskStorage>,
        policy: UpdatePolicy,
        data_file: PathBuf,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                tasks: TaskService::with_policy(storage, policy),
                data_file,
            }),
        }
    }

    /// Get reference to the task service
    pub fn tasks(&self) -> &TaskService {
        &self.inner.tasks
    }

    pub fn data_file(&self) -> &Path {
        &self.inner.data_file
    }
}
