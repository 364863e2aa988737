//! Session tokens
//!
//! Signed, time-bounded JWT session tokens carrying an identity claim.
//! Tokens are stateless: the server keeps no session table, so a token
//! remains valid until its expiry regardless of restarts, and logout can
//! only clear the client-side cookie.
//!
//! The signing secret is process-wide configuration read once from
//! `JWT_SECRET`; rotating it invalidates all outstanding tokens, which is
//! accepted operational behavior.

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Session token validity window.
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Display name of the identity this token was issued to.
    pub sub: String,
    /// Email of the identity.
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

static JWT_SECRET: OnceLock<String> = OnceLock::new();

/// Signing secret, loaded once for the lifetime of the process.
fn jwt_secret() -> &'static str {
    JWT_SECRET.get_or_init(|| {
        std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            "taskboard-dev-secret-change-in-production".to_string()
        })
    })
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a signed session token for an identity.
///
/// # Arguments
/// * `name` - Display name embedded as the subject claim
/// * `email` - Identity email
///
/// # Returns
/// Encoded token string, valid for [`TOKEN_TTL_SECS`]
pub fn create_token(name: String, email: String) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    create_token_at(name, email, now, now + TOKEN_TTL_SECS)
}

fn create_token_at(
    name: String,
    email: String,
    iat: u64,
    exp: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: name,
        email,
        exp,
        iat,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token.
///
/// # Returns
/// Decoded claims, or a [`TokenError`] distinguishing malformed, expired
/// and wrongly-signed tokens.
pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(jwt_secret().as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
