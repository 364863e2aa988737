//! Database operations for the to-do tree
//!
//! A structurally separate tree (todo_lists → todo_cards) with the same
//! shape as the board tree's lower levels. Cascading removal goes through
//! the cascade engine with [`crate::cascade::TODO_LIST_TREE`].

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A to-do list, root of the to-do tree. Owned by one identity by email.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TodoList {
    pub id: i64,
    pub name: String,
    pub owner_email: String,
}

/// A to-do card belonging to exactly one to-do list.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TodoCard {
    pub id: i64,
    pub todo_list_id: i64,
    pub title: String,
    pub content: Option<String>,
}

pub async fn todo_lists_for_owner(
    pool: &SqlitePool,
    owner_email: &str,
) -> Result<Vec<TodoList>, sqlx::Error> {
    sqlx::query_as::<_, TodoList>(
        "SELECT id, name, owner_email FROM todo_lists WHERE owner_email = ? ORDER BY id",
    )
    .bind(owner_email)
    .fetch_all(pool)
    .await
}

pub async fn create_todo_list(
    pool: &SqlitePool,
    name: String,
    owner_email: String,
) -> Result<TodoList, sqlx::Error> {
    let result = sqlx::query("INSERT INTO todo_lists (name, owner_email) VALUES (?, ?)")
        .bind(&name)
        .bind(&owner_email)
        .execute(pool)
        .await?;

    Ok(TodoList {
        id: result.last_insert_rowid(),
        name,
        owner_email,
    })
}

pub async fn cards_for_todo_list(
    pool: &SqlitePool,
    todo_list_id: i64,
) -> Result<Vec<TodoCard>, sqlx::Error> {
    sqlx::query_as::<_, TodoCard>(
        "SELECT id, todo_list_id, title, content FROM todo_cards WHERE todo_list_id = ? ORDER BY id",
    )
    .bind(todo_list_id)
    .fetch_all(pool)
    .await
}

pub async fn create_todo_card(
    pool: &SqlitePool,
    todo_list_id: i64,
    title: String,
    content: Option<String>,
) -> Result<TodoCard, sqlx::Error> {
    let result =
        sqlx::query("INSERT INTO todo_cards (todo_list_id, title, content) VALUES (?, ?, ?)")
            .bind(todo_list_id)
            .bind(&title)
            .bind(&content)
            .execute(pool)
            .await?;

    Ok(TodoCard {
        id: result.last_insert_rowid(),
        todo_list_id,
        title,
        content,
    })
}

/// Update a to-do card's title and content.
pub async fn update_todo_card(
    pool: &SqlitePool,
    card_id: i64,
    title: String,
    content: Option<String>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE todo_cards SET title = ?, content = ? WHERE id = ?")
        .bind(&title)
        .bind(&content)
        .bind(card_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Delete a single to-do card. Never touches its list.
pub async fn delete_todo_card(pool: &SqlitePool, card_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todo_cards WHERE id = ?")
        .bind(card_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
