//! Signed Token Codec
//!
//! Compact `payload.signature` tokens:
//! `base64url(JSON payload) "." base64url(HMAC-SHA256(secret, first segment))`.
//!
//! The signature is checked (in constant time) before the payload is
//! decoded. Expiry and other claim semantics belong to the caller.

use hmac::{Hmac, Mac};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::Sha256;
use thiserror::Error;

use crate::crypto::{from_base64url, to_base64url};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing secret is empty
    #[error("Token signing secret must not be empty")]
    EmptySecret,

    /// Not two base64url segments, or payload is not the expected JSON
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Token payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// HMAC-SHA256 signer keyed once at startup
#[derive(Clone)]
pub struct TokenSigner {
    mac: HmacSha256,
}

impl TokenSigner {
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        let mac = HmacSha256::new_from_slice(secret).map_err(|_| TokenError::EmptySecret)?;
        Ok(Self { mac })
    }

    /// Serialize and sign a payload
    pub fn sign<T: Serialize>(&self, payload: &T) -> Result<String, TokenError> {
        let body = to_base64url(&serde_json::to_vec(payload)?);

        let mut mac = self.mac.clone();
        mac.update(body.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!("{}.{}", body, to_base64url(&signature)))
    }

    /// Check the signature, then decode the payload
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let (body, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
        if body.is_empty() || signature_b64.contains('.') {
            return Err(TokenError::Malformed);
        }

        let signature = from_base64url(signature_b64).map_err(|_| TokenError::Malformed)?;

        let mut mac = self.mac.clone();
        mac.update(body.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let payload = from_base64url(body).map_err(|_| TokenError::Malformed)?;
        serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
