//! `MessagePusher` のトランスポート実装
//!
//! - `websocket`: トークンごとに WebSocket 接続の送信チャンネルを保持し、
//!   `ServerEvent` を JSON フレームに変換して送る

pub mod websocket;

pub use websocket::{ClientMap, WebSocketMessagePusher};
