//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64url)
//! - Password hashing (Argon2id)
//! - HMAC-SHA256 signed token codec

pub mod crypto;
pub mod password;
pub mod token;
