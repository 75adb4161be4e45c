//! User Entity
//!
//! A registered account. Created once at registration and never mutated.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, also the task owner id
    pub user_id: UserId,
    /// Unique email, compared exactly as stored
    pub email: Email,
    /// Argon2id hash
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
