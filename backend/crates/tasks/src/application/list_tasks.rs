//! List Tasks Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::error::TaskResult;

pub struct ListTasksUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> ListTasksUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: UserId) -> TaskResult<Vec<Task>> {
        self.repo.list_by_owner(owner_id).await
    }
}
