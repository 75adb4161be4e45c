//! Delete Task Use Case

use kernel::id::{TaskId, UserId};
use std::sync::Arc;

use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

pub struct DeleteTaskInput {
    pub task_id: TaskId,
    pub owner_id: UserId,
}

pub struct DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: DeleteTaskInput) -> TaskResult<()> {
        if !self.repo.delete(input.task_id, input.owner_id).await? {
            return Err(TaskError::NotFound);
        }

        tracing::info!(user_id = %input.owner_id, task_id = %input.task_id, "Task deleted");

        Ok(())
    }
}
