//! Server error types
//!
//! `ApiError` represents every failure a handler can produce. Each variant
//! maps to one HTTP status code and one human-readable message; the
//! `IntoResponse` impl renders the uniform `{"error": ...}` JSON body so no
//! handler ever leaks a raw driver error or a stack trace.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Session token verification failures.
///
/// Distinguishes the four rejection cases the session gate can hit. All of
/// them render as 401 responses, but the message tells the client (and the
/// logs) which case occurred.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// No `token` cookie was present on the request.
    #[error("missing session token")]
    Missing,
    /// The token could not be parsed as a signed token at all.
    #[error("malformed session token")]
    Malformed,
    /// The token was well-formed but past its expiry.
    #[error("session token expired")]
    Expired,
    /// The signature did not match the process signing secret.
    #[error("session token signature mismatch")]
    InvalidSignature,
}

/// Top-level error type for all request handling.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// A referenced record does not exist (e.g. unknown email at login).
    #[error("{0}")]
    NotFound(String),

    /// Password mismatch, or a verified token naming an unknown identity.
    #[error("invalid credentials")]
    Credential,

    /// Session token rejection from the gate or the token issuer.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Uniqueness violation surfaced as a client error (duplicate email).
    #[error("{0}")]
    Conflict(String),

    /// A cascade delete step failed. Only ever reported after the
    /// transaction scope has been rolled back.
    #[error("{0}")]
    Transaction(String),

    /// Storage failure outside a cascade scope. The driver error is logged;
    /// the client sees a generic message.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Anything else that must not leak details (hashing failure, token
    /// encoding failure).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Credential => StatusCode::UNAUTHORIZED,
            Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Transaction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
            }
            ApiError::Transaction(msg) => {
                tracing::error!("Transaction rolled back: {}", msg);
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
            _ => {
                tracing::warn!("Request rejected: {}", self);
            }
        }
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Validation("name is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("no such board".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Credential.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Token(TokenError::Expired).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Conflict("email already registered".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Transaction("delete failed".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_message_is_generic() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), "database error");
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::Missing.to_string(), "missing session token");
        assert_eq!(TokenError::Expired.to_string(), "session token expired");
    }
}
