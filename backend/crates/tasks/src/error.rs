//! Task Error Types
//!
//! Task-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Missing or blank field, or unreadable body
    #[error("Validation failed: {0}")]
    Validation(&'static str),

    /// No task with this id for this owner. Covers "not yours" as well.
    #[error("Task not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::Validation(_) => ErrorKind::BadRequest,
            TaskError::NotFound => ErrorKind::NotFound,
            TaskError::Database(_) | TaskError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TaskError::Validation(_) => "VALIDATION_ERROR",
            TaskError::NotFound => "NOT_FOUND",
            TaskError::Database(_) | TaskError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn public_message(&self) -> String {
        match self {
            TaskError::Validation(msg) => (*msg).to_string(),
            TaskError::NotFound => self.to_string(),
            TaskError::Database(_) | TaskError::Internal(_) => "Server error".to_string(),
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message()).with_code(self.code())
    }

    fn log(&self) {
        match self {
            TaskError::Database(e) => {
                tracing::error!(error = %e, "Task database error");
            }
            TaskError::Internal(msg) => {
                tracing::error!(message = %msg, "Task internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Task error");
            }
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        err.to_app_error()
    }
}

impl From<JsonRejection> for TaskError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        TaskError::Validation("Request body must be valid JSON")
    }
}

impl From<PathRejection> for TaskError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected task id");
        TaskError::NotFound
    }
}
