//! User Password Value Object
//!
//! Domain wrappers around `platform::password`, translating its errors
//! into `AuthError`.

use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;
use std::sync::LazyLock;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AuthResult<Self> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(|_| AuthError::Validation("Password is required"))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Stand-in hash for logins with an unknown email, built on first use
static DUMMY_PASSWORD: LazyLock<Option<UserPassword>> = LazyLock::new(|| {
    let raw = RawPassword::new("unknown-account-placeholder".to_string()).ok()?;
    UserPassword::from_raw(&raw, None).ok()
});

/// Argon2id PHC string, safe to store
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password. `pepper` is the optional application-wide secret.
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        raw.inner()
            .hash(pepper)
            .map(Self)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Hash to verify against when no account matches, so that an unknown
    /// email costs the same Argon2 work as a wrong password
    pub fn dummy() -> Option<&'static UserPassword> {
        DUMMY_PASSWORD.as_ref()
    }

    /// Constant-time verification; `pepper` must match the one used when hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
