//! Authentication module
//!
//! Registration, login and session management:
//!
//! - **`passwords`** - bcrypt hashing and verification of credentials
//! - **`sessions`** - signed, time-bounded session tokens
//! - **`users`** - user model and database operations
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! Tokens are stateless and carried in an HTTP-only cookie; the server
//! keeps no session table.

pub mod handlers;
pub mod passwords;
pub mod sessions;
pub mod users;

pub use handlers::{get_me, login, logout, register};
