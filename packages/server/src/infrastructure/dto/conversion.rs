//! Conversion logic between DTOs and domain types.

use sketchy_shared::time::timestamp_to_rfc3339;

use crate::domain::{PlayerSnapshot, ServerEvent, SessionSnapshot};
use crate::infrastructure::dto::{
    http::{PlayerDetailDto, RoomDetailDto, RoomSummaryDto},
    websocket::ServerMessage,
};

// ========================================
// Domain → WebSocket DTO
// ========================================

impl From<&ServerEvent> for ServerMessage {
    fn from(event: &ServerEvent) -> Self {
        match event {
            ServerEvent::PlayerList(names) => {
                Self::Playerlist(names.iter().map(|n| n.as_str().to_string()).collect())
            }
            ServerEvent::Chat(message) => Self::Chat(message.clone()),
            ServerEvent::Paint(stroke) => Self::Paint(stroke.as_value().clone()),
        }
    }
}

// ========================================
// Domain → HTTP DTO
// ========================================

impl From<&SessionSnapshot> for RoomSummaryDto {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            id: snapshot.room_id.to_string(),
            players: snapshot
                .players
                .iter()
                .map(|p| p.name.as_str().to_string())
                .collect(),
            is_running: snapshot.is_running,
            created_at: timestamp_to_rfc3339(snapshot.created_at.value()),
        }
    }
}

impl From<&PlayerSnapshot> for PlayerDetailDto {
    fn from(player: &PlayerSnapshot) -> Self {
        Self {
            name: player.name.as_str().to_string(),
            is_drawer: player.is_drawer,
            was_drawer: player.was_drawer,
            joined_at: timestamp_to_rfc3339(player.joined_at.value()),
        }
    }
}

impl From<&SessionSnapshot> for RoomDetailDto {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            id: snapshot.room_id.to_string(),
            players: snapshot.players.iter().map(PlayerDetailDto::from).collect(),
            is_running: snapshot.is_running,
            drawer: snapshot.drawer.as_ref().map(|n| n.as_str().to_string()),
            canvas_len: snapshot.canvas_len,
            chat_len: snapshot.chat_len,
            created_at: timestamp_to_rfc3339(snapshot.created_at.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlayerName, RoomIdFactory, StrokeRecord, Timestamp};
    use serde_json::json;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            room_id: RoomIdFactory::generate(),
            created_at: Timestamp::new(1672531200000),
            players: vec![
                PlayerSnapshot {
                    name: PlayerName::new("Aardvark".to_string()).unwrap(),
                    is_drawer: true,
                    was_drawer: true,
                    joined_at: Timestamp::new(1672531201000),
                },
                PlayerSnapshot {
                    name: PlayerName::new("Badger".to_string()).unwrap(),
                    is_drawer: false,
                    was_drawer: false,
                    joined_at: Timestamp::new(1672531202000),
                },
            ],
            is_running: true,
            drawer: Some(PlayerName::new("Aardvark".to_string()).unwrap()),
            canvas_len: 3,
            chat_len: 5,
        }
    }

    #[test]
    fn test_server_event_to_message() {
        // テスト項目: ドメインのイベントがチャンネルごとの DTO に変換される
        // given (前提条件):
        let list = ServerEvent::PlayerList(vec![PlayerName::new("Aardvark".to_string()).unwrap()]);
        let paint = ServerEvent::Paint(StrokeRecord::new(json!({"x0": 1})));

        // when (操作):
        let list_dto = ServerMessage::from(&list);
        let paint_dto = ServerMessage::from(&paint);

        // then (期待する結果):
        assert_eq!(list_dto, ServerMessage::Playerlist(vec!["Aardvark".to_string()]));
        assert_eq!(paint_dto, ServerMessage::Paint(json!({"x0": 1})));
    }

    #[test]
    fn test_snapshot_to_room_summary() {
        // テスト項目: スナップショットがルーム概要 DTO に変換される
        let snapshot = snapshot();

        let dto = RoomSummaryDto::from(&snapshot);

        assert_eq!(dto.id, snapshot.room_id.to_string());
        assert_eq!(dto.players, vec!["Aardvark", "Badger"]);
        assert!(dto.is_running);
        assert_eq!(dto.created_at, "2023-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_snapshot_to_room_detail() {
        // テスト項目: スナップショットがルーム詳細 DTO に変換される
        let snapshot = snapshot();

        let dto = RoomDetailDto::from(&snapshot);

        assert_eq!(dto.players.len(), 2);
        assert!(dto.players[0].is_drawer);
        assert_eq!(dto.players[1].joined_at, "2023-01-01T00:00:02.000Z");
        assert_eq!(dto.drawer.as_deref(), Some("Aardvark"));
        assert_eq!(dto.canvas_len, 3);
        assert_eq!(dto.chat_len, 5);
    }
}
