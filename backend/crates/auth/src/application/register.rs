//! Register Use Case
//!
//! Creates a new user account. No token is issued; the client signs in
//! separately.

use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        // Registration reveals whether an email is taken; login does not.
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let user = User::new(email, password_hash);

        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}
