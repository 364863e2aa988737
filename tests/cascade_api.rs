//! Cascading deletes over HTTP
//!
//! Exercises the delete endpoints end to end: one request, one
//! transaction, one response, and no orphan rows visible afterwards.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{send, test_app};

async fn seed_board(app: &axum::Router) -> (i64, i64, i64) {
    let (_, board, _) = send(
        app,
        "POST",
        "/boards",
        Some(json!({"name": "Work", "owner_email": "ada@example.com"})),
        None,
    )
    .await;
    let board_id = board["id"].as_i64().unwrap();

    let mut list_ids = Vec::new();
    for name in ["Todo", "Done"] {
        let (_, list, _) = send(
            app,
            "POST",
            "/lists",
            Some(json!({"board_id": board_id, "name": name})),
            None,
        )
        .await;
        list_ids.push(list["id"].as_i64().unwrap());
    }

    for (list_id, title) in [(list_ids[0], "a"), (list_ids[0], "b"), (list_ids[1], "c")] {
        send(
            app,
            "POST",
            "/cards",
            Some(json!({"list_id": list_id, "title": title})),
            None,
        )
        .await;
    }

    (board_id, list_ids[0], list_ids[1])
}

#[tokio::test]
async fn test_board_delete_removes_every_descendant() {
    let app = test_app().await;
    let (board_id, list_a, list_b) = seed_board(&app).await;

    let (status, body, _) = send(&app, "DELETE", &format!("/boards/{board_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Board and its lists and cards deleted successfully"
    );

    let (_, lists, _) = send(&app, "GET", &format!("/boards/{board_id}/lists"), None, None).await;
    assert_eq!(lists, Value::Array(vec![]));

    for list_id in [list_a, list_b] {
        let (_, cards, _) = send(&app, "GET", &format!("/lists/{list_id}/cards"), None, None).await;
        assert_eq!(cards, Value::Array(vec![]));
    }

    let (_, boards, _) = send(
        &app,
        "GET",
        "/boards?owner_email=ada@example.com",
        None,
        None,
    )
    .await;
    assert_eq!(boards, Value::Array(vec![]));
}

#[tokio::test]
async fn test_list_delete_spares_sibling_lists() {
    let app = test_app().await;
    let (board_id, list_a, list_b) = seed_board(&app).await;

    let (status, body, _) = send(&app, "DELETE", &format!("/lists/{list_a}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "List and its cards deleted successfully");

    let (_, cards, _) = send(&app, "GET", &format!("/lists/{list_a}/cards"), None, None).await;
    assert_eq!(cards, Value::Array(vec![]));

    // Sibling list and its card survive.
    let (_, lists, _) = send(&app, "GET", &format!("/boards/{board_id}/lists"), None, None).await;
    assert_eq!(lists.as_array().unwrap().len(), 1);
    let (_, cards, _) = send(&app, "GET", &format!("/lists/{list_b}/cards"), None, None).await;
    assert_eq!(cards.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleting_missing_board_succeeds() {
    let app = test_app().await;

    let (status, body, _) = send(&app, "DELETE", "/boards/424242", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Board and its lists and cards deleted successfully"
    );
}

#[tokio::test]
async fn test_todo_list_delete_cascades() {
    let app = test_app().await;

    let (_, list, _) = send(
        &app,
        "POST",
        "/todo-lists",
        Some(json!({"name": "Groceries", "owner_email": "ada@example.com"})),
        None,
    )
    .await;
    let list_id = list["id"].as_i64().unwrap();

    for title in ["Milk", "Bread", "Eggs"] {
        send(
            &app,
            "POST",
            "/todo-cards",
            Some(json!({"todo_list_id": list_id, "title": title})),
            None,
        )
        .await;
    }

    let (status, body, _) = send(&app, "DELETE", &format!("/todo-lists/{list_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "List and its cards deleted successfully");

    let (_, cards, _) = send(
        &app,
        "GET",
        &format!("/todo-lists/{list_id}/cards"),
        None,
        None,
    )
    .await;
    assert_eq!(cards, Value::Array(vec![]));
}

#[tokio::test]
async fn test_card_delete_never_touches_parents() {
    let app = test_app().await;
    let (board_id, list_a, _) = seed_board(&app).await;

    let (_, cards, _) = send(&app, "GET", &format!("/lists/{list_a}/cards"), None, None).await;
    let card_id = cards.as_array().unwrap()[0]["id"].as_i64().unwrap();

    let (status, body, _) = send(&app, "DELETE", &format!("/cards/{card_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Card deleted successfully");

    let (_, lists, _) = send(&app, "GET", &format!("/boards/{board_id}/lists"), None, None).await;
    assert_eq!(lists.as_array().unwrap().len(), 2);
}
