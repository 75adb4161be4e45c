//! Email Value Object
//!
//! The account's login identifier. Only presence is checked; the value is
//! stored and compared exactly as typed (case-sensitive).

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Reject a missing or blank email
    pub fn new(email: impl Into<String>) -> AuthResult<Self> {
        let email = email.into();

        if email.trim().is_empty() {
            return Err(AuthError::Validation("Email is required"));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
