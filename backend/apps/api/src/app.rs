//! Router Assembly
//!
//! Mounts the auth and task routers under `/api` and applies the
//! cross-cutting layers.

use auth::{AccessTokenService, AuthConfig, PgAuthRepository, auth_router};
use axum::http::{HeaderValue, Method, header};
use axum::{Router, routing::get};
use kernel::error::app_error::AppError;
use sqlx::PgPool;
use std::sync::Arc;
use tasks::{PgTaskRepository, task_router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn router(
    pool: PgPool,
    auth_config: AuthConfig,
    tokens: Arc<AccessTokenService>,
    frontend_origins: &[String],
) -> Router {
    let api = auth_router(PgAuthRepository::new(pool.clone()), auth_config, tokens.clone())
        .merge(task_router(PgTaskRepository::new(pool), tokens));

    Router::new()
        .route("/", get(banner))
        .nest("/api", api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors(frontend_origins))
}

fn cors(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ]))
        .allow_credentials(true)
}

async fn banner() -> &'static str {
    "Task list API is running"
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found").with_code("NOT_FOUND")
}
