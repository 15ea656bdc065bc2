//! File-based task storage implementation
//!
//! Stores the whole task collection as a pretty-printed JSON array in a
//! single file. Every load reads the file and every save rewrites it.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::model::Task;
use super::storage::TaskStorage;
use crate::{Error, Result};

/// File-based task store using JSON
#[derive(Debug, Clone)]
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// The file is not touched until the first load or save. A missing
    /// file reads as an empty collection and is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TaskStorage for FileTaskStore {
    async fn load(&self) -> Result<Vec<Task>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Task file {:?} does not exist yet", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| {
            Error::Storage(format!("Failed to parse tasks file {:?}: {}", self.path, e))
        })?;
        tracing::debug!("Loaded {} tasks from {:?}", tasks.len(), self.path);
        Ok(tasks)
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;

        // Ensure parent directory exists
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        tokio::fs::create_dir_all(parent).await?;

        let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4().as_hyphenated()));
        tokio::fs::write(&temp_path, content).await?;

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(Error::Storage(format!(
                "Failed to replace tasks file {:?}: {}",
                self.path, e
            )));
        }

        tracing::debug!("Saved {} tasks to {:?}", tasks.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileTaskStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        (FileTaskStore::new(path), temp_dir)
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let (store, _temp) = create_test_store();

        let tasks = store.load().await.unwrap();
        assert!(tasks.is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_blank_file_loads_empty() {
        let (store, _temp) = create_test_store();
        std::fs::write(store.path(), "  \n").unwrap();

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order() {
        let (store, _temp) = create_test_store();

        let tasks = vec![
            Task::new("Task 1"),
            Task::new("Task 2").with_description("second"),
            Task::new("Task 3"),
        ];
        store.save(&tasks).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, tasks);
    }

    #[tokio::test]
    async fn test_file_is_pretty_printed_camel_case() {
        let (store, _temp) = create_test_store();
        store.save(&[Task::new("Buy milk")]).await.unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n  {\n"));
        assert!(content.contains("\"createdAt\""));
        assert!(content.contains("\"title\": \"Buy milk\""));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_content() {
        let (store, _temp) = create_test_store();
        store
            .save(&[Task::new("a"), Task::new("b")])
            .await
            .unwrap();
        store.save(&[]).await.unwrap();

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data").join("tasks.json");
        let store = FileTaskStore::new(&path);

        store.save(&[Task::new("nested")]).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_leaves_no_temp_files() {
        let (store, temp) = create_test_store();
        store.save(&[Task::new("a")]).await.unwrap();
        store.save(&[Task::new("b")]).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let (store, _temp) = create_test_store();
        std::fs::write(store.path(), "{not json").unwrap();

        match store.load().await {
            Err(Error::Storage(msg)) => assert!(msg.contains("parse")),
            other => panic!("Expected Storage error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreadable_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be
        let store = FileTaskStore::new(temp_dir.path());

        match store.load().await {
            Err(Error::Io(_)) => {}
            other => panic!("Expected Io error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blocked_parent_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = FileTaskStore::new(blocker.join("tasks.json"));

        match store.save(&[Task::new("a")]).await {
            Err(Error::Io(_)) => {}
            other => panic!("Expected Io error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");

        let task = Task::new("Persistent task").with_description("Should survive reload");
        FileTaskStore::new(&path)
            .save(std::slice::from_ref(&task))
            .await
            .unwrap();

        let loaded = FileTaskStore::new(&path).load().await.unwrap();
        assert_eq!(loaded, vec![task]);
    }
}
