//! HTTP handlers for the board tree
//!
//! Reads and creates are thin mappings onto the store; the two cascading
//! deletes hand off to the cascade engine and return a single success or
//! failure message, never a partial result.
//!
//! These routes authorize by the client-supplied `owner_email` filter
//! rather than the session token, faithful to the system this replaces.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::boards::db;
use crate::cascade::{delete_tree, BOARD_TREE, LIST_TREE};
use crate::error::ApiError;
use crate::server::state::AppState;

#[derive(Deserialize, Debug)]
pub struct OwnerQuery {
    pub owner_email: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateBoardRequest {
    pub name: String,
    pub owner_email: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateListRequest {
    pub board_id: i64,
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateCardRequest {
    pub list_id: i64,
    pub title: String,
    pub content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct MoveCardRequest {
    pub list_id: i64,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub async fn get_boards(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<db::Board>>, ApiError> {
    let boards = db::boards_for_owner(&state.db, &query.owner_email).await?;
    Ok(Json(boards))
}

pub async fn create_board(
    State(state): State<AppState>,
    Json(request): Json<CreateBoardRequest>,
) -> Result<Json<db::Board>, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("board name must not be empty".into()));
    }

    let board = db::create_board(&state.db, request.name, request.owner_email).await?;
    tracing::info!("Board created: id={} ({})", board.id, board.name);
    Ok(Json(board))
}

pub async fn get_lists(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> Result<Json<Vec<db::List>>, ApiError> {
    let lists = db::lists_for_board(&state.db, board_id).await?;
    Ok(Json(lists))
}

pub async fn create_list(
    State(state): State<AppState>,
    Json(request): Json<CreateListRequest>,
) -> Result<Json<db::List>, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("list name must not be empty".into()));
    }

    let list = db::create_list(&state.db, request.board_id, request.name).await?;
    Ok(Json(list))
}

pub async fn get_cards(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
) -> Result<Json<Vec<db::Card>>, ApiError> {
    let cards = db::cards_for_list(&state.db, list_id).await?;
    Ok(Json(cards))
}

pub async fn create_card(
    State(state): State<AppState>,
    Json(request): Json<CreateCardRequest>,
) -> Result<Json<db::Card>, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::Validation("card title must not be empty".into()));
    }

    let card = db::create_card(&state.db, request.list_id, request.title, request.content).await?;
    Ok(Json(card))
}

pub async fn move_card(
    State(state): State<AppState>,
    Path(card_id): Path<i64>,
    Json(request): Json<MoveCardRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::move_card(&state.db, card_id, request.list_id).await?;
    Ok(Json(MessageResponse::new("Card updated successfully")))
}

pub async fn delete_card(
    State(state): State<AppState>,
    Path(card_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::delete_card(&state.db, card_id).await?;
    Ok(Json(MessageResponse::new("Card deleted successfully")))
}

/// Cascade: cards on the list, then the list itself.
pub async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_tree(&state.db, &LIST_TREE, list_id).await?;
    Ok(Json(MessageResponse::new(
        "List and its cards deleted successfully",
    )))
}

/// Cascade: every card on the board's lists, then the lists, then the
/// board.
pub async fn delete_board(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_tree(&state.db, &BOARD_TREE, board_id).await?;
    Ok(Json(MessageResponse::new(
        "Board and its lists and cards deleted successfully",
    )))
}
