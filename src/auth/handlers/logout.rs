//! Logout handler
//!
//! Logout is purely client-side cookie clearing. Tokens are stateless and
//! the server keeps no revocation list, so a captured token stays valid
//! until its natural expiry; all this handler can do is expire the cookie.

use axum::http::header::{HeaderName, SET_COOKIE};
use axum::response::{AppendHeaders, Json};

use crate::auth::handlers::session_cookie;
use crate::auth::handlers::types::StatusResponse;

pub async fn logout() -> (AppendHeaders<[(HeaderName, String); 1]>, Json<StatusResponse>) {
    let headers = AppendHeaders([(SET_COOKIE, session_cookie("", 0))]);
    (headers, Json(StatusResponse::success()))
}
