//! Error conversions
//!
//! Maps third-party error types onto the server's own error kinds.

use jsonwebtoken::errors::ErrorKind;

use crate::error::types::TokenError;

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            // Everything else (bad base64, wrong segment count, bad header)
            // means the client did not present a token we ever issued.
            _ => TokenError::Malformed,
        }
    }
}
