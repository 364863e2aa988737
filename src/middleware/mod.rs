//! Request middleware
//!
//! Currently a single concern: the session gate that protects the root
//! session-check route.

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
