//! Get Task Use Case

use kernel::id::{TaskId, UserId};
use std::sync::Arc;

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

pub struct GetTaskInput {
    pub task_id: TaskId,
    pub owner_id: UserId,
}

pub struct GetTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> GetTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: GetTaskInput) -> TaskResult<Task> {
        self.repo
            .find_by_id(input.task_id, input.owner_id)
            .await?
            .ok_or(TaskError::NotFound)
    }
}
