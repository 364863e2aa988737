//! Database operations for calendar events
//!
//! Flat table, plain CRUD, no hierarchy and no cascade.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A calendar event.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub date: NaiveDate,
    pub event: String,
}

pub async fn all_events(pool: &SqlitePool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>("SELECT id, date, event FROM events ORDER BY date, id")
        .fetch_all(pool)
        .await
}

pub async fn create_event(
    pool: &SqlitePool,
    date: NaiveDate,
    event: String,
) -> Result<Event, sqlx::Error> {
    let result = sqlx::query("INSERT INTO events (date, event) VALUES (?, ?)")
        .bind(date)
        .bind(&event)
        .execute(pool)
        .await?;

    Ok(Event {
        id: result.last_insert_rowid(),
        date,
        event,
    })
}

pub async fn update_event(
    pool: &SqlitePool,
    event_id: i64,
    date: NaiveDate,
    event: String,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE events SET date = ?, event = ? WHERE id = ?")
        .bind(date)
        .bind(&event)
        .bind(event_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_event(pool: &SqlitePool, event_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(event_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
