//! Router configuration
//!
//! Assembles the full Axum router: the gated root session-check route,
//! the public API routes, permissive CORS (the browser client runs on a
//! different origin), and a 404 fallback.

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::auth::get_me;
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

use super::api_routes::configure_api_routes;

/// Create the Axum router with all routes configured.
///
/// Only `GET /` passes through the session gate; every other route is
/// public (see `api_routes.rs` for the authorization model on resource
/// routes).
pub fn create_router(app_state: AppState) -> Router<()> {
    // Root session-check route, behind the gate.
    let gated = Router::new()
        .route("/", axum::routing::get(get_me))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    // Public API routes.
    let router = configure_api_routes(gated);

    let router = router.layer(CorsLayer::permissive());

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}
