//! HTTP handlers for the to-do tree
//!
//! Same surface as the board tree handlers one level down: list/create
//! to-do lists and cards, update or delete a single card, and cascade the
//! whole to-do list through the cascade engine.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::cascade::{delete_tree, TODO_LIST_TREE};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::todos::db;

#[derive(Deserialize, Debug)]
pub struct OwnerQuery {
    pub owner_email: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateTodoListRequest {
    pub name: String,
    pub owner_email: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateTodoCardRequest {
    pub todo_list_id: i64,
    pub title: String,
    pub content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateTodoCardRequest {
    pub title: String,
    pub content: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn get_todo_lists(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<db::TodoList>>, ApiError> {
    let lists = db::todo_lists_for_owner(&state.db, &query.owner_email).await?;
    Ok(Json(lists))
}

pub async fn create_todo_list(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoListRequest>,
) -> Result<Json<db::TodoList>, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation(
            "to-do list name must not be empty".into(),
        ));
    }

    let list = db::create_todo_list(&state.db, request.name, request.owner_email).await?;
    Ok(Json(list))
}

pub async fn get_todo_cards(
    State(state): State<AppState>,
    Path(todo_list_id): Path<i64>,
) -> Result<Json<Vec<db::TodoCard>>, ApiError> {
    let cards = db::cards_for_todo_list(&state.db, todo_list_id).await?;
    Ok(Json(cards))
}

pub async fn create_todo_card(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoCardRequest>,
) -> Result<Json<db::TodoCard>, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::Validation(
            "to-do card title must not be empty".into(),
        ));
    }

    let card =
        db::create_todo_card(&state.db, request.todo_list_id, request.title, request.content)
            .await?;
    Ok(Json(card))
}

pub async fn update_todo_card(
    State(state): State<AppState>,
    Path(card_id): Path<i64>,
    Json(request): Json<UpdateTodoCardRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::update_todo_card(&state.db, card_id, request.title, request.content).await?;
    Ok(Json(MessageResponse {
        message: "Card updated successfully".into(),
    }))
}

pub async fn delete_todo_card(
    State(state): State<AppState>,
    Path(card_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::delete_todo_card(&state.db, card_id).await?;
    Ok(Json(MessageResponse {
        message: "Card deleted successfully".into(),
    }))
}

/// Cascade: cards on the to-do list, then the list itself.
pub async fn delete_todo_list(
    State(state): State<AppState>,
    Path(todo_list_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_tree(&state.db, &TODO_LIST_TREE, todo_list_id).await?;
    Ok(Json(MessageResponse {
        message: "List and its cards deleted successfully".into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_state;

    #[tokio::test]
    async fn test_todo_list_cascade_through_handler() {
        let state = test_state().await;

        let Json(list) = create_todo_list(
            State(state.clone()),
            Json(CreateTodoListRequest {
                name: "Groceries".to_string(),
                owner_email: "ada@example.com".to_string(),
            }),
        )
        .await
        .unwrap();

        for title in ["Milk", "Bread"] {
            create_todo_card(
                State(state.clone()),
                Json(CreateTodoCardRequest {
                    todo_list_id: list.id,
                    title: title.to_string(),
                    content: None,
                }),
            )
            .await
            .unwrap();
        }

        let Json(response) = delete_todo_list(State(state.clone()), Path(list.id)).await.unwrap();
        assert_eq!(response.message, "List and its cards deleted successfully");

        let Json(cards) = get_todo_cards(State(state.clone()), Path(list.id)).await.unwrap();
        assert!(cards.is_empty());

        let Json(lists) = get_todo_lists(
            State(state),
            Query(OwnerQuery {
                owner_email: "ada@example.com".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(lists.is_empty());
    }
}
