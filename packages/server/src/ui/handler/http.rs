//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::SessionSnapshot,
    infrastructure::dto::http::{ChatHistoryDto, RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
    usecase::SessionClosed,
};

impl From<SessionClosed> for StatusCode {
    fn from(_: SessionClosed) -> Self {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Debug endpoint to get current session state (for testing purposes)
pub async fn debug_room_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    Ok(Json(state.session.snapshot().await?))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms
pub async fn get_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RoomSummaryDto>>, StatusCode> {
    let snapshot = state.session.snapshot().await?;
    Ok(Json(vec![RoomSummaryDto::from(&snapshot)]))
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    ensure_room(&state, &room_id)?;
    let snapshot = state.session.snapshot().await?;
    Ok(Json(RoomDetailDto::from(&snapshot)))
}

/// Get the retained chat lines of a room, oldest first
pub async fn get_chat_history(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<ChatHistoryDto>, StatusCode> {
    ensure_room(&state, &room_id)?;
    let messages = state.session.chat_history().await?;
    Ok(Json(ChatHistoryDto {
        id: room_id,
        messages,
    }))
}

fn ensure_room(state: &AppState, room_id: &str) -> Result<(), StatusCode> {
    if state.session.room_id().to_string() == room_id {
        Ok(())
    } else {
        tracing::debug!("Room '{}' not found", room_id);
        Err(StatusCode::NOT_FOUND)
    }
}
