//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub players: Vec<String>,
    pub is_running: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetailDto {
    pub name: String,
    pub is_drawer: bool,
    pub was_drawer: bool,
    pub joined_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub players: Vec<PlayerDetailDto>,
    pub is_running: bool,
    pub drawer: Option<String>,
    pub canvas_len: usize,
    pub chat_len: usize,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryDto {
    pub id: String,
    pub messages: Vec<String>,
}
