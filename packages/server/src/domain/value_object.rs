//! Value Objects
//!
//! 不変で、生成時に検証される値の型を定義します。

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValueObjectError;

/// 接続トークンの最大長（バイト）
pub const MAX_TOKEN_LEN: usize = 128;

/// Opaque per-connection identity assigned by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConnectionToken(String);

impl ConnectionToken {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyToken);
        }
        if value.len() > MAX_TOKEN_LEN {
            return Err(ValueObjectError::TokenTooLong(value.len(), MAX_TOKEN_LEN));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ConnectionToken {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConnectionToken> for String {
    fn from(token: ConnectionToken) -> Self {
        token.0
    }
}

impl fmt::Display for ConnectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name shown to the other players.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The secret word of a round.
///
/// Trailing whitespace (including the newline of a word-list line) is
/// stripped; guesses are compared against the stripped form exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let mut value = value.into();
        value.truncate(value.trim_end().len());
        if value.is_empty() {
            return Err(ValueObjectError::EmptyWord);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 大文字小文字を区別した完全一致（前後の空白も除去しない）
    pub fn matches(&self, text: &str) -> bool {
        self.0 == text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ルーム ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(Uuid);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// RoomId の生成
pub struct RoomIdFactory;

impl RoomIdFactory {
    pub fn generate() -> RoomId {
        RoomId(Uuid::new_v4())
    }
}

/// Unix epoch milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Reserved key of a paint payload that wipes the canvas.
pub const CLEAR_KEY: &str = "clear";

/// One opaque unit of drawing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeRecord(serde_json::Value);

impl StrokeRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// True when the payload is an object carrying the reserved `clear` key,
    /// whatever its value.
    pub fn is_clear(&self) -> bool {
        self.0
            .as_object()
            .is_some_and(|object| object.contains_key(CLEAR_KEY))
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}
