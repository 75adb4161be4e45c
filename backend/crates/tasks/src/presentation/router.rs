//! Task Router

use auth::AccessTokenService;
use auth::middleware::{AuthMiddlewareState, require_bearer_token};
use axum::middleware::from_fn_with_state;
use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::TaskRepository;
use crate::infra::postgres::PgTaskRepository;
use crate::presentation::handlers::{self, TaskAppState};

/// Create the task router with PostgreSQL repository
pub fn task_router(repo: PgTaskRepository, tokens: Arc<AccessTokenService>) -> Router {
    task_router_generic(repo, tokens)
}

/// Create a generic task router for any repository implementation
///
/// Every route requires a bearer token.
pub fn task_router_generic<R>(repo: R, tokens: Arc<AccessTokenService>) -> Router
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let state = TaskAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R>).post(handlers::create_task::<R>),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<R>)
                .patch(handlers::update_task::<R>)
                .delete(handlers::delete_task::<R>),
        )
        .route_layer(from_fn_with_state(
            AuthMiddlewareState::new(tokens),
            require_bearer_token,
        ))
        .with_state(state)
}
