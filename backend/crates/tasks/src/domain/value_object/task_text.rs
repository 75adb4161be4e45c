//! Task Text Value Object

use serde::{Deserialize, Serialize};

use crate::error::{TaskError, TaskResult};

/// Non-blank task description, stored as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskText(String);

impl TaskText {
    pub fn new(text: impl Into<String>) -> TaskResult<Self> {
        let text = text.into();

        if text.trim().is_empty() {
            return Err(TaskError::Validation("Task text is required"));
        }

        Ok(Self(text))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TaskText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
