//! Update Task Use Case
//!
//! Sets the completion flag. Repeating the same update is harmless.

use kernel::id::{TaskId, UserId};
use std::sync::Arc;

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

pub struct UpdateTaskInput {
    pub task_id: TaskId,
    pub owner_id: UserId,
    /// `None` when the client did not send the field
    pub completed: Option<bool>,
}

pub struct UpdateTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateTaskInput) -> TaskResult<Task> {
        let completed = input
            .completed
            .ok_or(TaskError::Validation("Field 'completed' is required"))?;

        let task = self
            .repo
            .set_completed(input.task_id, input.owner_id, completed)
            .await?
            .ok_or(TaskError::NotFound)?;

        tracing::info!(
            user_id = %input.owner_id,
            task_id = %task.task_id,
            completed,
            "Task updated"
        );

        Ok(task)
    }
}
