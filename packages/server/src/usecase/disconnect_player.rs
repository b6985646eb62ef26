//! UseCase: プレイヤー切断処理
//!
//! 1. ロースターから削除し、残りのプレイヤーへ名前リストを送信
//! 2. 描き手が抜けた場合はラウンドを放棄し、全員に通知
//! 3. トランスポートから接続チャンネルを削除（leaveRoom）

use std::sync::Arc;

use crate::domain::{ConnectionToken, GameSession, MessagePusher};

use super::delivery::deliver;

/// プレイヤー切断のユースケース
pub struct DisconnectPlayerUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectPlayerUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// プレイヤー切断を実行
    ///
    /// 同じトークンの別タブがまだ開いていても、プレイヤーはロースターから外れる。
    pub async fn execute(&self, session: &mut GameSession, token: &ConnectionToken) {
        let deliveries = session.disconnect(token);
        self.message_pusher.unregister_client(token).await;
        deliver(self.message_pusher.as_ref(), deliveries).await;
    }
}
