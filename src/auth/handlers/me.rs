//! Session check handler
//!
//! Serves the root identity-check route. This is the only route behind the
//! session gate: by the time the handler runs, the middleware has already
//! verified the cookie token and attached the identity.

use axum::response::Json;

use crate::auth::handlers::types::StatusResponse;
use crate::middleware::auth::AuthUser;

pub async fn get_me(AuthUser(user): AuthUser) -> Json<StatusResponse> {
    Json(StatusResponse::with_name(user.name))
}
