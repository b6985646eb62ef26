//! 名前リスト・単語リストの実装
//!
//! - `name_list`: トークンのハッシュから表示名を決定する `NameProvider`
//! - `word_list`: 単語リストから一様ランダムに選ぶ `WordProvider`
//!
//! どちらもファイル（1 行 1 エントリ）または組み込みのリストから読み込みます。

pub mod name_list;
pub mod word_list;

use std::path::PathBuf;

use thiserror::Error;

pub use name_list::NameListProvider;
pub use word_list::WordListProvider;

/// 読み込み時のエラー（起動時にのみ発生し、致命的）
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} contains no usable entries")]
    EmptyCorpus(String),
}
