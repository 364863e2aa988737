//! Authentication handler types
//!
//! Request and response types shared by the register, login, logout and
//! session-check handlers.

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address (must be unique)
    pub email: String,
    /// Plaintext password (hashed before storage, never persisted raw)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address (exact match, no normalization)
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Status response
///
/// `{"Status": "Success"}` on register/login/logout; the session-check
/// route additionally carries the verified display name.
#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "Success".to_string(),
            name: None,
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            status: "Success".to_string(),
            name: Some(name.into()),
        }
    }
}
