//! Access Token Issuer/Verifier
//!
//! Stateless bearer tokens asserting `{user id, email, issued-at, expiry}`,
//! signed with the server-held secret. There is no refresh: an expired
//! token means signing in again.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::token::TokenSigner;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::identity::AuthenticatedUser;
use crate::error::{AuthError, AuthResult};

/// Signed token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Owner (user) id
    pub sub: UserId,
    pub email: String,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expires at, unix seconds
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct AccessTokenService {
    signer: TokenSigner,
    ttl: chrono::Duration,
}

impl AccessTokenService {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let signer = TokenSigner::new(&config.token_secret)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let ttl = chrono::Duration::from_std(config.token_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid token TTL: {e}")))?;

        Ok(Self { signer, ttl })
    }

    /// Issue a token valid from now for the configured TTL
    pub fn issue(&self, user_id: UserId, email: &str) -> AuthResult<String> {
        self.issue_at(user_id, email, Utc::now())
    }

    pub fn issue_at(&self, user_id: UserId, email: &str, now: DateTime<Utc>) -> AuthResult<String> {
        let claims = AccessClaims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        self.signer
            .sign(&claims)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Verify signature and expiry against the current time
    pub fn verify(&self, token: &str) -> AuthResult<AuthenticatedUser> {
        self.verify_at(token, Utc::now())
    }

    /// Every failure collapses into `Forbidden`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<AuthenticatedUser> {
        let claims: AccessClaims = self.signer.verify(token).map_err(|e| {
            tracing::debug!(reason = %e, "Token verification failed");
            AuthError::Forbidden
        })?;

        if now.timestamp() >= claims.exp {
            tracing::debug!(user_id = %claims.sub, "Token expired");
            return Err(AuthError::Forbidden);
        }

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}
