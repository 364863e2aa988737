//! Login handler
//!
//! Handles `POST /api/auth/login`:
//!
//! 1. Look up the user by exact email match
//! 2. Verify the password with bcrypt
//! 3. Issue a signed session token
//! 4. Set it as an HTTP-only `token` cookie
//!
//! Unknown email and wrong password are reported as distinct errors,
//! matching the observed behavior of the system this replaces. That leaks
//! account existence; see DESIGN.md before changing it.

use axum::extract::State;
use axum::http::header::{HeaderName, SET_COOKIE};
use axum::response::{AppendHeaders, Json};

use crate::auth::handlers::session_cookie;
use crate::auth::handlers::types::{LoginRequest, StatusResponse};
use crate::auth::passwords::verify_password;
use crate::auth::sessions::{create_token, TOKEN_TTL_SECS};
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(AppendHeaders<[(HeaderName, String); 1]>, Json<StatusResponse>), ApiError> {
    tracing::info!("Login request for email: {}", request.email);

    let user = get_user_by_email(&state.db, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login with unknown email: {}", request.email);
            ApiError::NotFound("no account with that email".into())
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for: {}", request.email);
        return Err(ApiError::Credential);
    }

    let token = create_token(user.name.clone(), user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::Internal("failed to create session token".into())
    })?;

    tracing::info!("User logged in: {} ({})", user.name, user.email);

    let headers = AppendHeaders([(SET_COOKIE, session_cookie(&token, TOKEN_TTL_SECS))]);
    Ok((headers, Json(StatusResponse::success())))
}
