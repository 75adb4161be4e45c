//! Application Layer
//!
//! Task use cases. Every one of them receives the owner id from the
//! verified token, never from the request body.

pub mod create_task;
pub mod delete_task;
pub mod get_task;
pub mod list_tasks;
pub mod update_task;

// Re-exports
pub use create_task::{CreateTaskInput, CreateTaskUseCase};
pub use delete_task::{DeleteTaskInput, DeleteTaskUseCase};
pub use get_task::{GetTaskInput, GetTaskUseCase};
pub use list_tasks::ListTasksUseCase;
pub use update_task::{UpdateTaskInput, UpdateTaskUseCase};
