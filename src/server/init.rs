//! Server initialization
//!
//! Builds the application: connect the store, assemble the state, wire the
//! router.

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// 1. Connect the database pool and run migrations
/// 2. Build [`AppState`]
/// 3. Assemble the router with all routes and the session gate
pub async fn create_app() -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing taskboard backend server");

    let db = load_database().await?;
    let app_state = AppState { db };

    Ok(create_router(app_state))
}
