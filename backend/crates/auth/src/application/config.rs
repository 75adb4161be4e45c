//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Lifetime of an issued access token
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
///
/// Built once at startup and shared read-only.
#[derive(Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing
    pub token_secret: Vec<u8>,
    /// Access token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: ACCESS_TOKEN_TTL,
            password_pepper: None,
        }
    }

    /// Create config with a random signing secret (for tests and local runs)
    pub fn with_random_secret() -> Self {
        Self::new(platform::crypto::random_bytes(32))
    }

    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
