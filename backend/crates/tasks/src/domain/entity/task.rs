//! Task Entity
//!
//! A to-do item. The owner is fixed at creation; only `completed` ever changes.

use chrono::{DateTime, Utc};
use kernel::id::{TaskId, UserId};

use crate::domain::value_object::task_text::TaskText;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub task_id: TaskId,
    /// Authenticated user that created the task
    pub owner_id: UserId,
    pub text: TaskText,
    pub completed: bool,
    /// Insertion time, used for listing order
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, incomplete task
    pub fn new(owner_id: UserId, text: TaskText) -> Self {
        Self {
            task_id: TaskId::new(),
            owner_id,
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }
}
