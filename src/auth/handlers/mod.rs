//! Authentication handlers
//!
//! HTTP handlers for registration, login, logout and the gated session
//! check, plus the cookie format they share.

pub mod login;
pub mod logout;
pub mod me;
pub mod register;
pub mod types;

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use register::register;

/// Render the `token` session cookie.
///
/// HTTP-only so scripts cannot read it; `Max-Age=0` clears it on logout.
pub(crate) fn session_cookie(token: &str, max_age_secs: u64) -> String {
    format!("token={token}; HttpOnly; Path=/; Max-Age={max_age_secs}; SameSite=Lax")
}
