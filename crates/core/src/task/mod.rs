//! Task module
//!
//! This module contains task-related types, storage backends and the
//! service that ties them together.

mod file_store;
mod memory_store;
mod model;
mod patch;
mod service;
mod storage;

pub use file_store::FileTaskStore;
pub use memory_store::MemoryTaskStore;
pub use model::*;
pub use patch::{FieldUpdate, TaskPatch};
pub use service::{TaskService, UpdatePolicy};
pub use storage::TaskStorage;
