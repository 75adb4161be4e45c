//! Login Use Case
//!
//! Verifies credentials and issues an access token.

use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::AccessTokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Bearer token for the Authorization header
    pub token: String,
    pub user_id: UserId,
}

impl std::fmt::Debug for LoginOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginOutput")
            .field("token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
    tokens: Arc<AccessTokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>, tokens: Arc<AccessTokenService>) -> Self {
        Self {
            user_repo,
            config,
            tokens,
        }
    }

    /// Unknown email and wrong password both fail with `InvalidCredentials`.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            // Same hashing cost as a wrong password
            if let Some(dummy) = UserPassword::dummy() {
                dummy.verify(&raw_password, self.config.pepper());
            }
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.user_id, user.email.as_str())?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            token,
            user_id: user.user_id,
        })
    }
}
