//! Password hashing and verification
//!
//! One-way credential handling on top of bcrypt. A plaintext password is
//! hashed before it is ever handed to the store; a hashing failure aborts
//! the request rather than letting a raw password through.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::ApiError;

/// Hash a plaintext password for storage.
///
/// The digest is an opaque string safe to persist. An empty plaintext is a
/// validation error; a bcrypt failure is surfaced as an internal error and
/// never skipped.
pub fn hash_password(plaintext: &str) -> Result<String, ApiError> {
    if plaintext.is_empty() {
        return Err(ApiError::Validation("password must not be empty".into()));
    }

    hash(plaintext, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::Internal("password hashing failed".into())
    })
}

/// Verify a plaintext password against a stored digest.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, ApiError> {
    verify(plaintext, digest).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::Internal("password verification failed".into())
    })
}
