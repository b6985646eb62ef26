//! MessagePusher trait 定義
//!
//! クライアントへのメッセージ送信（トランスポート）の抽象化。
//! ドメイン層はこの trait に依存し、WebSocket などの具体的な実装には依存しない。
//!
//! | トランスポート操作 | メソッド              |
//! |--------------------|-----------------------|
//! | joinRoom           | `register_client`     |
//! | leaveRoom          | `unregister_client`   |
//! | sendTo             | `push_to`             |
//! | sendToAll          | `broadcast`           |
//!
//! `push_to_channel` は新しく開いた一つの接続へのキャンバス再送に使う。

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::sync::mpsc;

use super::{error::MessagePushError, event::ServerEvent, value_object::ConnectionToken};

/// 各接続の送信チャンネル（エンコード済みのテキストフレームを流す）
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// トークンに接続チャンネルを追加する（同じトークンで複数接続可）
    async fn register_client(&self, token: ConnectionToken, sender: PusherChannel);

    /// トークンに紐づく全ての接続チャンネルを解除する
    async fn unregister_client(&self, token: &ConnectionToken);

    /// 特定のトークンにイベントを送信する
    async fn push_to(
        &self,
        token: &ConnectionToken,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;

    /// 一つの接続チャンネルだけにイベントを送信する（同じトークンの他の接続には送らない）
    async fn push_to_channel(
        &self,
        channel: &PusherChannel,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;

    /// 複数のトークンにイベントを送信する（一部の失敗は許容する）
    async fn broadcast(
        &self,
        targets: Vec<ConnectionToken>,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;
}
