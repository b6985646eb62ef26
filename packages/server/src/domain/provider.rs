//! 外部データソースのインターフェース
//!
//! 名前リスト・単語リストは不透明な文字列の供給元として扱います。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

#[cfg(test)]
use mockall::automock;

use super::value_object::{ConnectionToken, PlayerName, Word};

/// Deterministic mapping from a connection token to a display name.
#[cfg_attr(test, automock)]
pub trait NameProvider: Send + Sync {
    fn name_for(&self, token: &ConnectionToken) -> PlayerName;
}

/// Source of secret words.
#[cfg_attr(test, automock)]
pub trait WordProvider: Send + Sync {
    /// One word chosen uniformly at random from the corpus.
    fn random_word(&self) -> Word;
}
