//! UseCase: チャット受信処理
//!
//! チャット行の記録と配信、`!start` によるラウンド開始、正解判定を
//! セッションに任せ、結果の配信だけを行う。

use std::sync::Arc;

use crate::domain::{ConnectionToken, GameSession, MessagePusher, WordProvider};

use super::delivery::deliver;

/// チャット受信のユースケース
pub struct SendChatUseCase {
    message_pusher: Arc<dyn MessagePusher>,
    words: Arc<dyn WordProvider>,
}

impl SendChatUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>, words: Arc<dyn WordProvider>) -> Self {
        Self {
            message_pusher,
            words,
        }
    }

    pub async fn execute(&self, session: &mut GameSession, token: &ConnectionToken, text: &str) {
        let deliveries = session.receive_chat(token, text, self.words.as_ref());
        deliver(self.message_pusher.as_ref(), deliveries).await;
    }
}
