//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` をトークン単位で管理
//! - ドメインイベントを JSON テキストフレームにエンコードして送信（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。
//!
//! 同じトークンで複数の接続（ブラウザのタブなど）が存在しうるため、
//! トークンごとに sender のリストを保持します。送信に失敗した sender
//! （受信側が閉じたもの）はその場で取り除きます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionToken, MessagePushError, MessagePusher, PusherChannel, ServerEvent},
    infrastructure::dto::websocket::ServerMessage,
};

pub type ClientMap = HashMap<String, Vec<PusherChannel>>;

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let clients = Arc::new(Mutex::new(HashMap::new()));
/// let pusher = WebSocketMessagePusher::new(clients.clone());
///
/// pusher.push_to(&token, &ServerEvent::Chat("Your word: zeppelin.".into())).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// Key: connection token, Value: そのトークンの全接続
    clients: Arc<Mutex<ClientMap>>,
}

impl WebSocketMessagePusher {
    pub fn new(clients: Arc<Mutex<ClientMap>>) -> Self {
        Self { clients }
    }

    fn encode(event: &ServerEvent) -> Result<String, MessagePushError> {
        serde_json::to_string(&ServerMessage::from(event))
            .map_err(|e| MessagePushError::Encode(e.to_string()))
    }

    /// Send to every live channel of one token; drops closed channels.
    /// Returns the number of channels that accepted the frame.
    fn send_to_channels(channels: &mut Vec<PusherChannel>, frame: &str) -> usize {
        channels.retain(|sender| sender.send(frame.to_string()).is_ok());
        channels.len()
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(HashMap::new())))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, token: ConnectionToken, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        let channels = clients.entry(token.as_str().to_string()).or_default();
        channels.push(sender);
        tracing::debug!(
            "Client '{}' registered to MessagePusher ({} connection(s))",
            token,
            channels.len()
        );
    }

    async fn unregister_client(&self, token: &ConnectionToken) {
        let mut clients = self.clients.lock().await;
        clients.remove(token.as_str());
        tracing::debug!("Client '{}' unregistered from MessagePusher", token);
    }

    async fn push_to(
        &self,
        token: &ConnectionToken,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let mut clients = self.clients.lock().await;

        let Some(channels) = clients.get_mut(token.as_str()) else {
            return Err(MessagePushError::ClientNotFound(token.to_string()));
        };
        if Self::send_to_channels(channels, &frame) == 0 {
            clients.remove(token.as_str());
            return Err(MessagePushError::PushFailed(format!(
                "all connections of '{}' are closed",
                token
            )));
        }
        tracing::debug!("Pushed message to client '{}'", token);
        Ok(())
    }

    async fn push_to_channel(
        &self,
        channel: &PusherChannel,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        channel
            .send(frame)
            .map_err(|_| MessagePushError::PushFailed("connection is closed".to_string()))
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionToken>,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let mut clients = self.clients.lock().await;

        for target in targets {
            let Some(channels) = clients.get_mut(target.as_str()) else {
                tracing::warn!("Client '{}' not found during broadcast, skipping", target);
                continue;
            };
            // ブロードキャストでは一部の送信失敗を許容
            if Self::send_to_channels(channels, &frame) == 0 {
                tracing::warn!("Failed to push message to client '{}'", target);
                clients.remove(target.as_str());
            }
        }

        Ok(())
    }
}
