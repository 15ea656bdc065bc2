//! Core library for the to-do API
//!
//! This crate contains the task business logic, including:
//! - The task model and the tri-state patch used for updates
//! - The storage abstraction and its JSON file / in-memory backends
//! - The task service driving the read-modify-write cycle

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
