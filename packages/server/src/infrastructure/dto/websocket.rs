//! WebSocket frame DTOs.
//!
//! Frames are JSON text, tagged by channel:
//!
//! ```text
//! {"channel":"playerlist","payload":["Aardvark","Badger"]}
//! {"channel":"chat","payload":"Aardvark: hello"}
//! {"channel":"paint","payload":{"x0":1,"y0":2,"x1":3,"y1":4}}
//! ```

use serde::{Deserialize, Serialize};

/// Server → client frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel", content = "payload", rename_all = "lowercase")]
pub enum ServerMessage {
    Playerlist(Vec<String>),
    Chat(String),
    Paint(serde_json::Value),
}

/// Client → server frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel", content = "payload", rename_all = "lowercase")]
pub enum ClientMessage {
    Chat(ChatPayload),
    Paint(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub text: String,
}

impl ClientMessage {
    /// Parse a text frame. Anything that is not a well-formed frame is
    /// taken as plain chat text.
    pub fn from_frame(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_else(|e| {
            tracing::debug!("Treating non-JSON frame as chat text: {}", e);
            ClientMessage::Chat(ChatPayload {
                text: text.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_messages_encode_with_channel_tag() {
        // テスト項目: サーバーからのフレームはチャンネル名とペイロードで表現される
        // given (前提条件):
        let playerlist = ServerMessage::Playerlist(vec!["Aardvark".to_string(), "Badger".to_string()]);
        let chat = ServerMessage::Chat("Aardvark: hi".to_string());
        let paint = ServerMessage::Paint(json!({"clear": true}));

        // when (操作) / then (期待する結果):
        assert_eq!(
            serde_json::to_value(&playerlist).unwrap(),
            json!({"channel": "playerlist", "payload": ["Aardvark", "Badger"]})
        );
        assert_eq!(
            serde_json::to_value(&chat).unwrap(),
            json!({"channel": "chat", "payload": "Aardvark: hi"})
        );
        assert_eq!(
            serde_json::to_value(&paint).unwrap(),
            json!({"channel": "paint", "payload": {"clear": true}})
        );
    }

    #[test]
    fn test_client_frames_parse() {
        // テスト項目: クライアントからのチャット・ペイントフレームを解釈できる
        let chat = ClientMessage::from_frame(r#"{"channel":"chat","payload":{"text":"!start"}}"#);
        let paint = ClientMessage::from_frame(r#"{"channel":"paint","payload":{"x0":1,"colour":"red"}}"#);

        assert_eq!(
            chat,
            ClientMessage::Chat(ChatPayload {
                text: "!start".to_string()
            })
        );
        assert_eq!(paint, ClientMessage::Paint(json!({"x0": 1, "colour": "red"})));
    }

    #[test]
    fn test_plain_text_frame_becomes_chat() {
        // テスト項目: JSON でないフレームはそのままチャット本文として扱われる
        let message = ClientMessage::from_frame("zeppelin");
        assert_eq!(
            message,
            ClientMessage::Chat(ChatPayload {
                text: "zeppelin".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_channel_becomes_chat() {
        // テスト項目: 未知のチャンネルのフレームも生のテキストとしてチャット扱いになる
        let raw = r#"{"channel":"shout","payload":"hey"}"#;
        assert_eq!(
            ClientMessage::from_frame(raw),
            ClientMessage::Chat(ChatPayload {
                text: raw.to_string()
            })
        );
    }
}
