//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Credentials body shared by register and login.
/// Fields are optional so that a missing field is a validation error, not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub type RegisterRequest = CredentialsRequest;
pub type LoginRequest = CredentialsRequest;

/// Plain confirmation body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
