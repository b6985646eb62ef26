//! ドメイン層のエラー型

use thiserror::Error;

/// Value Object の生成時に発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("connection token must not be empty")]
    EmptyToken,

    #[error("connection token is too long: {0} bytes (max {1})")]
    TokenTooLong(usize, usize),

    #[error("player name must not be empty")]
    EmptyName,

    #[error("word must not be empty")]
    EmptyWord,
}

/// ラウンド状態遷移のエラー
///
/// クライアントには通知されず、ログに記録された上で無視される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("a round is already running")]
    AlreadyRunning,

    #[error("no eligible drawer remains in this rotation cycle")]
    NoEligibleDrawer,
}

/// メッセージ送信（通知）のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),

    #[error("failed to encode event: {0}")]
    Encode(String),
}
