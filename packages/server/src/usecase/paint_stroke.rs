//! UseCase: 描画ストローク受信処理

use std::sync::Arc;

use crate::domain::{ConnectionToken, GameSession, MessagePusher, StrokeRecord};

use super::delivery::deliver;

/// ストローク受信のユースケース
///
/// ストロークはキャンバス履歴に追加され、送信者を含む全員に転送される。
/// 消去マーカーは履歴を空にするだけで、それ自体は記録されない（転送はされる）。
pub struct PaintStrokeUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl PaintStrokeUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    pub async fn execute(
        &self,
        session: &mut GameSession,
        token: &ConnectionToken,
        stroke: StrokeRecord,
    ) {
        let deliveries = session.receive_paint(token, stroke);
        deliver(self.message_pusher.as_ref(), deliveries).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ServerEvent, Timestamp, pusher::MockMessagePusher},
        usecase::test_support::{session, token, upper_case_names},
    };
    use mockall::{Sequence, predicate::eq};
    use serde_json::json;

    #[tokio::test]
    async fn test_stroke_is_broadcast_to_all_players() {
        // テスト項目: ストロークは送信者を含む全員にそのまま転送される
        // given (前提条件):
        let names = upper_case_names();
        let mut session = session();
        session.connect(token("alice"), names.as_ref(), Timestamp::new(1));
        session.connect(token("bob"), names.as_ref(), Timestamp::new(2));
        let stroke = StrokeRecord::new(json!({"x0": 0.1, "y0": 0.2, "x1": 0.3, "y1": 0.4}));
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .with(
                eq(vec![token("alice"), token("bob")]),
                eq(ServerEvent::Paint(stroke.clone())),
            )
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = PaintStrokeUseCase::new(Arc::new(pusher));

        // when (操作):
        usecase.execute(&mut session, &token("bob"), stroke).await;

        // then (期待する結果):
        assert_eq!(session.canvas().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_marker_empties_canvas_log_and_is_forwarded() {
        // テスト項目: 消去マーカーは全員に転送され、履歴は空になる（マーカー自体は残らない）
        // given (前提条件):
        let names = upper_case_names();
        let mut session = session();
        session.connect(token("alice"), names.as_ref(), Timestamp::new(1));
        session.connect(token("bob"), names.as_ref(), Timestamp::new(2));
        let everyone = vec![token("alice"), token("bob")];
        let strokes = [json!({"x0": 1}), json!({"x0": 2}), json!({"clear": true})];
        let mut pusher = MockMessagePusher::new();
        let mut seq = Sequence::new();
        for stroke in &strokes {
            pusher
                .expect_broadcast()
                .with(
                    eq(everyone.clone()),
                    eq(ServerEvent::Paint(StrokeRecord::new(stroke.clone()))),
                )
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
        let usecase = PaintStrokeUseCase::new(Arc::new(pusher));

        // when (操作):
        for stroke in strokes {
            usecase
                .execute(&mut session, &token("alice"), StrokeRecord::new(stroke))
                .await;
        }

        // then (期待する結果):
        assert!(session.canvas().is_empty());
        assert!(session.canvas().replay().is_empty());
    }
}
