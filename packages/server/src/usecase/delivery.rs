//! Hand session deliveries to the transport.
//!
//! Fan-out is fire-and-forget: failures are logged and never retried or
//! reported back to whoever caused the event.

use crate::domain::{Delivery, MessagePusher};

pub(crate) async fn deliver(message_pusher: &dyn MessagePusher, deliveries: Vec<Delivery>) {
    for Delivery { mut recipients, event } in deliveries {
        match recipients.len() {
            0 => {}
            1 => {
                let Some(recipient) = recipients.pop() else {
                    continue;
                };
                if let Err(e) = message_pusher.push_to(&recipient, &event).await {
                    tracing::warn!("Failed to push to '{}': {}", recipient, e);
                }
            }
            _ => {
                if let Err(e) = message_pusher.broadcast(recipients, &event).await {
                    tracing::warn!("Failed to broadcast: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionToken, MessagePushError, ServerEvent, pusher::MockMessagePusher};
    use mockall::{Sequence, predicate::eq};

    fn token(value: &str) -> ConnectionToken {
        ConnectionToken::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_deliver_routes_by_recipient_count_in_order() {
        // テスト項目: 宛先一人は push_to、複数は broadcast、空は送信なしで、順番通りに送られる
        // given (前提条件):
        let mut pusher = MockMessagePusher::new();
        let mut seq = Sequence::new();
        pusher
            .expect_broadcast()
            .with(
                eq(vec![token("a"), token("b")]),
                eq(ServerEvent::Chat("first".to_string())),
            )
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        pusher
            .expect_push_to()
            .with(eq(token("a")), eq(ServerEvent::Chat("second".to_string())))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        // when (操作):
        deliver(
            &pusher,
            vec![
                Delivery::to_all(vec![token("a"), token("b")], ServerEvent::Chat("first".to_string())),
                Delivery::to_all(Vec::new(), ServerEvent::Chat("nobody".to_string())),
                Delivery::to_one(token("a"), ServerEvent::Chat("second".to_string())),
            ],
        )
        .await;

        // then (期待する結果): expectations are checked when the mock drops
    }

    #[tokio::test]
    async fn test_deliver_continues_after_failure() {
        // テスト項目: 送信に失敗しても後続の配信は継続される
        // given (前提条件):
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_push_to()
            .times(2)
            .returning(|t, _| Err(MessagePushError::ClientNotFound(t.to_string())));

        // when (操作) / then (期待する結果): パニックせず両方送信を試みる
        deliver(
            &pusher,
            vec![
                Delivery::to_one(token("gone"), ServerEvent::Chat("one".to_string())),
                Delivery::to_one(token("gone"), ServerEvent::Chat("two".to_string())),
            ],
        )
        .await;
    }
}
