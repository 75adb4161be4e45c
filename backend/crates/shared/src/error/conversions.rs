//! Error conversions
//!
//! Database error classification and the HTTP response shape used by
//! every endpoint.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// SQLx helpers (feature-gated)
// ============================================================================

/// Whether a sqlx error is a PostgreSQL unique violation (SQLSTATE 23505)
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "status": self.status_code(),
            "title": self.kind().as_str(),
            "code": self.code(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}
