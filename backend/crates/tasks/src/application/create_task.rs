//! Create Task Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::domain::value_object::task_text::TaskText;
use crate::error::TaskResult;

pub struct CreateTaskInput {
    pub owner_id: UserId,
    pub text: String,
}

pub struct CreateTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> CreateTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// New tasks always start incomplete
    pub async fn execute(&self, input: CreateTaskInput) -> TaskResult<Task> {
        let text = TaskText::new(input.text)?;
        let task = Task::new(input.owner_id, text);

        self.repo.create(&task).await?;

        tracing::info!(user_id = %task.owner_id, task_id = %task.task_id, "Task created");

        Ok(task)
    }
}
