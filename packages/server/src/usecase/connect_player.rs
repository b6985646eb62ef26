//! UseCase: プレイヤー接続処理
//!
//! 1. トランスポートに接続チャンネルを登録（joinRoom）
//! 2. ロースターに登録（初回のみ名前を割り当て、全員に名前リストを送信）
//! 3. キャンバス履歴を新しく開いた接続チャンネルだけにリプレイ
//!    （同じトークンの既存の接続は既に履歴を持っている）
//!
//! セッションルーターから一度に一つずつ呼ばれるため、登録とリプレイの間に
//! 他のストロークが割り込むことはない。

use std::sync::Arc;

use sketchy_shared::time::Clock;

use crate::domain::{
    ConnectionToken, GameSession, MessagePusher, NameProvider, PusherChannel, Timestamp,
};

use super::delivery::deliver;

/// プレイヤー接続のユースケース
pub struct ConnectPlayerUseCase {
    message_pusher: Arc<dyn MessagePusher>,
    names: Arc<dyn NameProvider>,
    clock: Arc<dyn Clock>,
}

impl ConnectPlayerUseCase {
    pub fn new(
        message_pusher: Arc<dyn MessagePusher>,
        names: Arc<dyn NameProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            message_pusher,
            names,
            clock,
        }
    }

    /// プレイヤー接続を実行
    ///
    /// # Arguments
    ///
    /// * `session` - 対象のゲームセッション
    /// * `token` - 接続のトークン
    /// * `sender` - この接続へのメッセージ送信用チャンネル
    pub async fn execute(
        &self,
        session: &mut GameSession,
        token: ConnectionToken,
        sender: PusherChannel,
    ) {
        self.message_pusher
            .register_client(token.clone(), sender.clone())
            .await;

        let joined_at = Timestamp::new(self.clock.now_millis());
        let joined = session.connect(token.clone(), self.names.as_ref(), joined_at);

        deliver(self.message_pusher.as_ref(), joined.deliveries).await;

        for event in &joined.replay {
            if let Err(e) = self.message_pusher.push_to_channel(&sender, event).await {
                tracing::warn!("Canvas replay to '{}' stopped: {}", token, e);
                break;
            }
        }
    }
}
