//! UseCase 層のエラー型

use thiserror::Error;

/// セッションルーター（アクター）が既に停止している
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("game session has stopped")]
pub struct SessionClosed;
