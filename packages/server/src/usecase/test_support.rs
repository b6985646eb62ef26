//! UseCase テスト用の共通ヘルパー

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::{
    domain::{
        ConnectionToken, GameSession, PlayerName, RoomIdFactory, SessionConfig, Timestamp, Word,
        provider::MockNameProvider,
    },
    infrastructure::provider::WordListProvider,
};

pub fn token(value: &str) -> ConnectionToken {
    ConnectionToken::new(value.to_string()).unwrap()
}

pub fn session() -> GameSession {
    GameSession::new(RoomIdFactory::generate(), Timestamp::new(0), SessionConfig::default())
}

/// "alice" -> "ALICE"
pub fn upper_case_names() -> Arc<MockNameProvider> {
    let mut names = MockNameProvider::new();
    names
        .expect_name_for()
        .returning(|t| PlayerName::new(t.as_str().to_uppercase()).unwrap());
    Arc::new(names)
}

pub fn single_word(word: &str) -> Arc<WordListProvider> {
    Arc::new(WordListProvider::from_words(vec![Word::new(word).unwrap()]).unwrap())
}

/// Drain every frame already queued for one connection.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<Value> {
    let mut frames = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        frames.push(serde_json::from_str(&frame).unwrap());
    }
    frames
}
