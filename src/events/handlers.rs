//! HTTP handlers for calendar events

use axum::extract::{Path, State};
use axum::response::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::events::db;
use crate::server::state::AppState;

#[derive(Deserialize, Debug)]
pub struct EventRequest {
    pub date: NaiveDate,
    pub event: String,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

pub async fn get_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<db::Event>>, ApiError> {
    let events = db::all_events(&state.db).await?;
    Ok(Json(events))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<EventRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if request.event.trim().is_empty() {
        return Err(ApiError::Validation("event text must not be empty".into()));
    }

    let event = db::create_event(&state.db, request.date, request.event).await?;
    Ok(Json(MessageResponse {
        message: "Event added successfully".into(),
        id: Some(event.id),
    }))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(request): Json<EventRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::update_event(&state.db, event_id, request.date, request.event).await?;
    Ok(Json(MessageResponse {
        message: "Event updated successfully".into(),
        id: None,
    }))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::delete_event(&state.db, event_id).await?;
    Ok(Json(MessageResponse {
        message: "Event deleted successfully".into(),
        id: None,
    }))
}
