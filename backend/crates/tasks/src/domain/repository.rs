//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Every lookup takes the owner id; there is no way to reach another user's task.

use kernel::id::{TaskId, UserId};

use crate::domain::entity::task::Task;
use crate::error::TaskResult;

/// Task store
#[trait_variant::make(TaskRepository: Send)]
pub trait LocalTaskRepository {
    async fn create(&self, task: &Task) -> TaskResult<()>;

    /// Single task matching both ids. `None` when missing or owned by someone else.
    async fn find_by_id(&self, task_id: TaskId, owner_id: UserId) -> TaskResult<Option<Task>>;

    /// All tasks of one owner in insertion order
    async fn list_by_owner(&self, owner_id: UserId) -> TaskResult<Vec<Task>>;

    /// Set the flag on a task matching both ids. `None` when there is no such task.
    async fn set_completed(
        &self,
        task_id: TaskId,
        owner_id: UserId,
        completed: bool,
    ) -> TaskResult<Option<Task>>;

    /// Remove a task matching both ids. `false` when there is no such task.
    async fn delete(&self, task_id: TaskId, owner_id: UserId) -> TaskResult<bool>;
}
