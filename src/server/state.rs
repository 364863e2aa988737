//! Application state
//!
//! `AppState` is the single state container handed to the router. It holds
//! the database pool explicitly; nothing in the server reaches for a
//! global connection. Lifecycle is process start to shutdown, and tests
//! construct their own state around an in-memory pool.

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Thread-safe; cloning is cheap.
    pub db: SqlitePool,
}

/// Allows handlers to extract the pool directly with `State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}
