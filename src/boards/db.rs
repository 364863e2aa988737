//! Database operations for the board tree
//!
//! Thin parameterized CRUD for boards, lists and cards. Cascading removal
//! of a board or a list lives in the cascade engine, not here.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A board, the root of the board tree. Owned by one identity by email.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Board {
    pub id: i64,
    pub name: String,
    pub owner_email: String,
}

/// A list belonging to exactly one board.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct List {
    pub id: i64,
    pub board_id: i64,
    pub name: String,
}

/// A card belonging to exactly one list.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Card {
    pub id: i64,
    pub list_id: i64,
    pub title: String,
    pub content: Option<String>,
}

/// All boards owned by one identity.
pub async fn boards_for_owner(
    pool: &SqlitePool,
    owner_email: &str,
) -> Result<Vec<Board>, sqlx::Error> {
    sqlx::query_as::<_, Board>(
        "SELECT id, name, owner_email FROM boards WHERE owner_email = ? ORDER BY id",
    )
    .bind(owner_email)
    .fetch_all(pool)
    .await
}

/// Create an empty board.
pub async fn create_board(
    pool: &SqlitePool,
    name: String,
    owner_email: String,
) -> Result<Board, sqlx::Error> {
    let result = sqlx::query("INSERT INTO boards (name, owner_email) VALUES (?, ?)")
        .bind(&name)
        .bind(&owner_email)
        .execute(pool)
        .await?;

    Ok(Board {
        id: result.last_insert_rowid(),
        name,
        owner_email,
    })
}

/// All lists on one board.
pub async fn lists_for_board(pool: &SqlitePool, board_id: i64) -> Result<Vec<List>, sqlx::Error> {
    sqlx::query_as::<_, List>("SELECT id, board_id, name FROM lists WHERE board_id = ? ORDER BY id")
        .bind(board_id)
        .fetch_all(pool)
        .await
}

/// Create a list linked to its board at creation time.
pub async fn create_list(
    pool: &SqlitePool,
    board_id: i64,
    name: String,
) -> Result<List, sqlx::Error> {
    let result = sqlx::query("INSERT INTO lists (board_id, name) VALUES (?, ?)")
        .bind(board_id)
        .bind(&name)
        .execute(pool)
        .await?;

    Ok(List {
        id: result.last_insert_rowid(),
        board_id,
        name,
    })
}

/// All cards on one list.
pub async fn cards_for_list(pool: &SqlitePool, list_id: i64) -> Result<Vec<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>(
        "SELECT id, list_id, title, content FROM cards WHERE list_id = ? ORDER BY id",
    )
    .bind(list_id)
    .fetch_all(pool)
    .await
}

/// Create a card linked to its list at creation time.
pub async fn create_card(
    pool: &SqlitePool,
    list_id: i64,
    title: String,
    content: Option<String>,
) -> Result<Card, sqlx::Error> {
    let result = sqlx::query("INSERT INTO cards (list_id, title, content) VALUES (?, ?, ?)")
        .bind(list_id)
        .bind(&title)
        .bind(&content)
        .execute(pool)
        .await?;

    Ok(Card {
        id: result.last_insert_rowid(),
        list_id,
        title,
        content,
    })
}

/// Move a card to another list (drag and drop).
pub async fn move_card(pool: &SqlitePool, card_id: i64, list_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE cards SET list_id = ? WHERE id = ?")
        .bind(list_id)
        .bind(card_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Delete a single card. Never touches its list or board.
pub async fn delete_card(pool: &SqlitePool, card_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cards WHERE id = ?")
        .bind(card_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_pool;

    #[tokio::test]
    async fn test_board_list_card_round_trip() {
        let pool = test_pool().await;

        let board = create_board(&pool, "Work".into(), "ada@example.com".into())
            .await
            .unwrap();
        let list = create_list(&pool, board.id, "Todo".into()).await.unwrap();
        let card = create_card(&pool, list.id, "Write tests".into(), Some("today".into()))
            .await
            .unwrap();

        let boards = boards_for_owner(&pool, "ada@example.com").await.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].name, "Work");

        let lists = lists_for_board(&pool, board.id).await.unwrap();
        assert_eq!(lists.len(), 1);

        let cards = cards_for_list(&pool, list.id).await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, card.id);
    }

    #[tokio::test]
    async fn test_owner_filter() {
        let pool = test_pool().await;

        create_board(&pool, "Mine".into(), "ada@example.com".into())
            .await
            .unwrap();
        create_board(&pool, "Theirs".into(), "bob@example.com".into())
            .await
            .unwrap();

        let boards = boards_for_owner(&pool, "ada@example.com").await.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].name, "Mine");
    }

    #[tokio::test]
    async fn test_move_card() {
        let pool = test_pool().await;

        let board = create_board(&pool, "Work".into(), "ada@example.com".into())
            .await
            .unwrap();
        let todo = create_list(&pool, board.id, "Todo".into()).await.unwrap();
        let done = create_list(&pool, board.id, "Done".into()).await.unwrap();
        let card = create_card(&pool, todo.id, "Ship it".into(), None)
            .await
            .unwrap();

        let moved = move_card(&pool, card.id, done.id).await.unwrap();
        assert_eq!(moved, 1);

        assert!(cards_for_list(&pool, todo.id).await.unwrap().is_empty());
        assert_eq!(cards_for_list(&pool, done.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_card_leaves_list_intact() {
        let pool = test_pool().await;

        let board = create_board(&pool, "Work".into(), "ada@example.com".into())
            .await
            .unwrap();
        let list = create_list(&pool, board.id, "Todo".into()).await.unwrap();
        let card = create_card(&pool, list.id, "One".into(), None).await.unwrap();

        assert_eq!(delete_card(&pool, card.id).await.unwrap(), 1);
        assert_eq!(delete_card(&pool, card.id).await.unwrap(), 0);
        assert_eq!(lists_for_board(&pool, board.id).await.unwrap().len(), 1);
    }
}
