//! Field-level task updates
//!
//! A `TaskPatch` distinguishes a field that was left out of the request from
//! one that was sent as `null` and one that carries a value. Both PUT and
//! PATCH funnel through [`TaskPatch::apply`].

use serde::{Deserialize, Deserializer};

use super::model::{from_object, Task};
use crate::{Error, Result};

/// Tri-state update for a single field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Not present in the request
    #[default]
    Absent,
    /// Present as an explicit `null`
    Null,
    /// Present with a value
    Value(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

// Only reached when the key is present; `#[serde(default)]` covers `Absent`.
impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}

/// Requested changes to a task's mutable fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: FieldUpdate<String>,
    pub description: FieldUpdate<String>,
    pub completed: FieldUpdate<bool>,
}

#[derive(Deserialize)]
struct TaskPatchFields {
    #[serde(default)]
    title: FieldUpdate<String>,
    #[serde(default)]
    description: FieldUpdate<String>,
    #[serde(default)]
    completed: FieldUpdate<bool>,
}

impl<'de> Deserialize<'de> for TaskPatch {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields: TaskPatchFields = from_object(deserializer)?;
        Ok(Self {
            title: fields.title,
            description: fields.description,
            completed: fields.completed,
        })
    }
}

impl TaskPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = FieldUpdate::Value(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldUpdate::Value(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = FieldUpdate::Value(completed);
        self
    }

    /// True when none of the fields were supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_absent() && self.description.is_absent() && self.completed.is_absent()
    }

    /// Check the patch without touching any task
    pub fn validate(&self) -> Result<()> {
        match &self.title {
            FieldUpdate::Null => return Err(Error::validation("Title cannot be null")),
            FieldUpdate::Value(title) if title.trim().is_empty() => {
                return Err(Error::validation("Title cannot be empty"))
            }
            _ => {}
        }

        if self.completed == FieldUpdate::Null {
            return Err(Error::validation("Completed must be a boolean"));
        }

        Ok(())
    }

    /// Merge the patch into `task`, leaving absent fields untouched
    pub fn apply(&self, task: &mut Task) -> Result<()> {
        self.validate()?;

        if let FieldUpdate::Value(title) = &self.title {
            task.title = title.clone();
        }

        match &self.description {
            FieldUpdate::Value(description) => task.description = description.clone(),
            FieldUpdate::Null => task.description.clear(),
            FieldUpdate::Absent => {}
        }

        if let FieldUpdate::Value(completed) = self.completed {
            task.completed = completed;
        }

        Ok(())
    }
}
