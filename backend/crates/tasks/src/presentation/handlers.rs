//! HTTP Handlers
//!
//! All handlers sit behind the bearer-token middleware and take the owner
//! from [`AuthenticatedUser`].

use auth::AuthenticatedUser;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::TaskId;
use std::sync::Arc;

use crate::application::{
    CreateTaskInput, CreateTaskUseCase, DeleteTaskInput, DeleteTaskUseCase, GetTaskInput,
    GetTaskUseCase, ListTasksUseCase, UpdateTaskInput, UpdateTaskUseCase,
};
use crate::domain::repository::TaskRepository;
use crate::error::TaskResult;
use crate::presentation::dto::{CreateTaskRequest, MessageResponse, TaskResponse, UpdateTaskRequest};

/// Shared state for task handlers
#[derive(Clone)]
pub struct TaskAppState<R>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/tasks
pub async fn list_tasks<R>(
    State(state): State<TaskAppState<R>>,
    user: AuthenticatedUser,
) -> TaskResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let tasks = ListTasksUseCase::new(state.repo.clone())
        .execute(user.user_id)
        .await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /api/tasks
pub async fn create_task<R>(
    State(state): State<TaskAppState<R>>,
    user: AuthenticatedUser,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> TaskResult<(StatusCode, Json<TaskResponse>)>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let task = CreateTaskUseCase::new(state.repo.clone())
        .execute(CreateTaskInput {
            owner_id: user.user_id,
            text: req.text.unwrap_or_default(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /api/tasks/{id}
pub async fn get_task<R>(
    State(state): State<TaskAppState<R>>,
    user: AuthenticatedUser,
    path: Result<Path<TaskId>, PathRejection>,
) -> TaskResult<Json<TaskResponse>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let Path(task_id) = path?;

    let task = GetTaskUseCase::new(state.repo.clone())
        .execute(GetTaskInput {
            task_id,
            owner_id: user.user_id,
        })
        .await?;

    Ok(Json(task.into()))
}

/// PATCH /api/tasks/{id}
pub async fn update_task<R>(
    State(state): State<TaskAppState<R>>,
    user: AuthenticatedUser,
    path: Result<Path<TaskId>, PathRejection>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> TaskResult<Json<TaskResponse>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let Path(task_id) = path?;
    let Json(req) = payload?;

    let task = UpdateTaskUseCase::new(state.repo.clone())
        .execute(UpdateTaskInput {
            task_id,
            owner_id: user.user_id,
            completed: req.completed,
        })
        .await?;

    Ok(Json(task.into()))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task<R>(
    State(state): State<TaskAppState<R>>,
    user: AuthenticatedUser,
    path: Result<Path<TaskId>, PathRejection>,
) -> TaskResult<Json<MessageResponse>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let Path(task_id) = path?;

    DeleteTaskUseCase::new(state.repo.clone())
        .execute(DeleteTaskInput {
            task_id,
            owner_id: user.user_id,
        })
        .await?;

    Ok(Json(MessageResponse::new("Task deleted")))
}
