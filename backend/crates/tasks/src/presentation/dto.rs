//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{TaskId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::task::Task;

/// Create task request. A missing `text` is a validation error, not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Update task request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Task as returned to its owner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.task_id,
            text: task.text.into_inner(),
            completed: task.completed,
            owner_id: task.owner_id,
            created_at: task.created_at,
        }
    }
}

/// Plain confirmation body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
