//! Access-Control Middleware
//!
//! Gates protected routes on a bearer token and attaches the verified
//! identity to the request. This is the only place that decides the
//! authentication outcome.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;
use http::HeaderValue;
use http::header::AUTHORIZATION;
use std::sync::Arc;

use crate::application::token::AccessTokenService;
use crate::domain::entity::identity::AuthenticatedUser;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<AccessTokenService>,
}

impl AuthMiddlewareState {
    pub fn new(tokens: Arc<AccessTokenService>) -> Self {
        Self { tokens }
    }
}

/// Middleware that requires a valid bearer token
///
/// - no `Authorization` header: 401, the verifier is not consulted
/// - not `Bearer <token>`, or the token fails verification: 403
pub async fn require_bearer_token(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> AuthResult<Response> {
    let user = authenticate_header(req.headers(), &state.tokens)?;

    // Replaces anything a client might have smuggled in
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Resolve the `Authorization` header into a verified identity
pub fn authenticate_header(
    headers: &HeaderMap,
    tokens: &AccessTokenService,
) -> AuthResult<AuthenticatedUser> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::Unauthenticated)?;

    let token = bearer_token(value).ok_or(AuthError::Forbidden)?;

    tokens.verify(token)
}

fn bearer_token(value: &HeaderValue) -> Option<&str> {
    let value = value.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Extract the identity attached by [`require_bearer_token`]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
