//! Error Types
//!
//! This module defines the error types used across the server and their
//! conversion into HTTP responses.
//!
//! Every failure that reaches a handler boundary is converted to a single
//! JSON body of the form `{"error": "<message>"}` with an appropriate
//! status code. Raw driver errors are logged but never exposed to clients.

pub mod conversion;
pub mod types;

pub use types::{ApiError, TokenError};
