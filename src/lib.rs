//! Taskboard backend
//!
//! A request-driven backend for hierarchical productivity data: boards
//! that own lists that own cards, a parallel to-do tree, and a flat
//! calendar-events table, gated behind a cookie-based session layer.
//!
//! # Architecture
//!
//! - **`auth`** - registration, login, password hashing, session tokens
//! - **`middleware`** - the session gate for the protected root route
//! - **`cascade`** - atomic cascading deletion of resource trees
//! - **`boards`** / **`todos`** / **`events`** - resource stores and handlers
//! - **`routes`** - router assembly
//! - **`server`** - configuration, state, initialization
//! - **`error`** - error types and their JSON rendering

pub mod auth;
pub mod boards;
pub mod cascade;
pub mod error;
pub mod events;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod todos;

pub use error::{ApiError, TokenError};
pub use server::{create_app, AppState};
