//! Domain Layer
//!
//! - Task entity and its text value object
//! - Owner-scoped repository trait

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::task::Task;
pub use repository::TaskRepository;
