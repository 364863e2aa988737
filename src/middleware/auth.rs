//! Session gate middleware
//!
//! Gatekeeper for protected routes. It extracts the `token` cookie from
//! the inbound request, verifies it, and either attaches the resolved
//! identity to the request extensions or rejects the request with a
//! structured JSON error before the handler runs.
//!
//! Only the root session-check route sits behind this gate. Resource
//! routes authorize implicitly by filtering on a client-supplied
//! `owner_email` parameter, faithful to the system this replaces; see
//! DESIGN.md for the open question around hardening that.

use axum::extract::{Request, State};
use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::sessions::verify_token;
use crate::auth::users::get_user_by_email;
use crate::error::{ApiError, TokenError};
use crate::server::state::AppState;

/// Identity resolved from a verified session token.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub name: String,
    pub email: String,
}

/// Session gate.
///
/// 1. Extracts the `token` cookie
/// 2. Verifies signature and expiry
/// 3. Confirms the claimed identity still exists in the store
/// 4. Attaches [`AuthenticatedUser`] to the request extensions
///
/// Any failure short-circuits with a JSON `{"error": ...}` response and
/// the protected handler never executes.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = token_from_headers(request.headers())?;

    let claims = verify_token(&token).map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        e
    })?;

    // The token is stateless, so confirm the identity it names still exists.
    let user = get_user_by_email(&state.db, &claims.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token names unknown identity: {}", claims.email);
            ApiError::Credential
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        name: user.name,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Pull the session token out of the `Cookie` header.
fn token_from_headers(headers: &HeaderMap) -> Result<String, TokenError> {
    let cookies = headers
        .get(COOKIE)
        .and_then(|h| h.to_str().ok())
        .ok_or(TokenError::Missing)?;

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("token="))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(TokenError::Missing)
}

/// Axum extractor for the authenticated user.
///
/// Handlers behind the gate take this as a parameter to receive the
/// identity the middleware attached.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Token(TokenError::Missing)
            })?;

        Ok(AuthUser(user))
    }
}
