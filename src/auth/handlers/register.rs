//! Registration handler
//!
//! Handles `POST /api/auth/register`:
//!
//! 1. Validate that name, email and password are present
//! 2. Reject duplicate emails
//! 3. Hash the password with bcrypt
//! 4. Insert the user row
//!
//! The password is always hashed before it reaches the store; a pre-hashed
//! password is never accepted from the caller.

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{RegisterRequest, StatusResponse};
use crate::auth::passwords::hash_password;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::server::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    tracing::info!("Registration request for email: {}", request.email);

    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("name must not be empty".into()));
    }
    if !request.email.contains('@') {
        return Err(ApiError::Validation("invalid email format".into()));
    }
    if request.password.is_empty() {
        return Err(ApiError::Validation("password must not be empty".into()));
    }

    if get_user_by_email(&state.db, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::Conflict("email already registered".into()));
    }

    let password_hash = hash_password(&request.password)?;

    let user = create_user(&state.db, request.name, request.email, password_hash).await?;

    tracing::info!("User created: {} ({})", user.name, user.email);

    Ok(Json(StatusResponse::success()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_state;

    #[tokio::test]
    async fn test_register_success() {
        let state = test_state().await;

        let request = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "password123".to_string(),
        };

        let Json(response) = register(State(state.clone()), Json(request)).await.unwrap();
        assert_eq!(response.status, "Success");

        let stored = get_user_by_email(&state.db, "ada@example.com")
            .await
            .unwrap()
            .expect("user should be persisted");
        // The persisted credential must never equal the plaintext.
        assert_ne!(stored.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = test_state().await;

        let first = RegisterRequest {
            name: "Ada".to_string(),
            email: "dup@example.com".to_string(),
            password: "password123".to_string(),
        };
        register(State(state.clone()), Json(first)).await.unwrap();

        let second = RegisterRequest {
            name: "Impostor".to_string(),
            email: "dup@example.com".to_string(),
            password: "password456".to_string(),
        };
        let result = register(State(state), Json(second)).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let state = test_state().await;

        let request = RegisterRequest {
            name: "".to_string(),
            email: "ada@example.com".to_string(),
            password: "password123".to_string(),
        };
        let result = register(State(state.clone()), Json(request)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let request = RegisterRequest {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        let result = register(State(state), Json(request)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
