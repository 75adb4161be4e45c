//! Tasks Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Task entity, text value object, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Every route sits behind the bearer-token middleware from `auth`
//! - The owner comes from the verified token only
//! - Update and delete match on (task id, owner id) in one statement, so a
//!   foreign task is indistinguishable from a missing one

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TaskError, TaskResult};
pub use infra::postgres::PgTaskRepository;
pub use presentation::router::{task_router, task_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
