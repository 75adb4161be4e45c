//! Presentation Layer
//!
//! HTTP handlers and DTOs for the API.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::TaskAppState;
pub use router::{task_router, task_router_generic};
