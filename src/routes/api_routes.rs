//! API route handlers
//!
//! Adds every public route to the router:
//!
//! ## Authentication
//! - `POST /api/auth/register` - registration
//! - `POST /api/auth/login` - login, sets the `token` cookie
//! - `POST /api/auth/logout` - clears the cookie
//!
//! ## Board tree
//! - `GET /boards` / `POST /boards`
//! - `GET /boards/{id}/lists` / `POST /lists`
//! - `GET /lists/{id}/cards` / `POST /cards`
//! - `PUT /cards/{id}` / `DELETE /cards/{id}`
//! - `DELETE /lists/{id}` / `DELETE /boards/{id}` (cascading)
//!
//! ## To-do tree
//! - `GET`/`POST /todo-lists`, `DELETE /todo-lists/{id}` (cascading)
//! - `GET /todo-lists/{id}/cards`, `POST /todo-cards`
//! - `PUT`/`DELETE /todo-cards/{id}`
//!
//! ## Events
//! - `GET`/`POST /events`, `PUT`/`DELETE /events/{id}`
//!
//! These routes are public: the resource routes filter by the caller's
//! `owner_email` parameter instead of the session token. Only the root
//! session-check route (wired in `router.rs`) sits behind the gate.

use axum::Router;

use crate::auth::{login, logout, register};
use crate::boards::handlers as boards;
use crate::events::handlers as events;
use crate::server::state::AppState;
use crate::todos::handlers as todos;

/// Configure API routes.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout))
        // Board tree
        .route(
            "/boards",
            axum::routing::get(boards::get_boards).post(boards::create_board),
        )
        .route("/boards/{board_id}/lists", axum::routing::get(boards::get_lists))
        .route("/boards/{board_id}", axum::routing::delete(boards::delete_board))
        .route("/lists", axum::routing::post(boards::create_list))
        .route("/lists/{list_id}/cards", axum::routing::get(boards::get_cards))
        .route("/lists/{list_id}", axum::routing::delete(boards::delete_list))
        .route("/cards", axum::routing::post(boards::create_card))
        .route(
            "/cards/{card_id}",
            axum::routing::put(boards::move_card).delete(boards::delete_card),
        )
        // To-do tree
        .route(
            "/todo-lists",
            axum::routing::get(todos::get_todo_lists).post(todos::create_todo_list),
        )
        .route(
            "/todo-lists/{list_id}/cards",
            axum::routing::get(todos::get_todo_cards),
        )
        .route(
            "/todo-lists/{list_id}",
            axum::routing::delete(todos::delete_todo_list),
        )
        .route("/todo-cards", axum::routing::post(todos::create_todo_card))
        .route(
            "/todo-cards/{card_id}",
            axum::routing::put(todos::update_todo_card).delete(todos::delete_todo_card),
        )
        // Calendar events
        .route(
            "/events",
            axum::routing::get(events::get_events).post(events::create_event),
        )
        .route(
            "/events/{event_id}",
            axum::routing::put(events::update_event).delete(events::delete_event),
        )
}
