//! Secret words drawn uniformly at random from a word list.

use std::path::Path;

use rand::Rng;

use crate::domain::{Word, WordProvider};

use super::ProviderError;

const EMBEDDED_WORDS: &str = include_str!("../../../assets/words.txt");

#[derive(Debug, Clone)]
pub struct WordListProvider {
    /// Never empty.
    words: Vec<Word>,
}

impl WordListProvider {
    /// The built-in word list.
    pub fn embedded() -> Self {
        Self {
            words: parse_words(EMBEDDED_WORDS),
        }
    }

    /// One candidate per line; trailing whitespace is stripped and blank
    /// lines are skipped.
    pub fn from_file(path: &Path) -> Result<Self, ProviderError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_words(parse_words(&contents))
            .map_err(|_| ProviderError::EmptyCorpus(path.display().to_string()))
    }

    pub fn from_words(words: Vec<Word>) -> Result<Self, ProviderError> {
        if words.is_empty() {
            return Err(ProviderError::EmptyCorpus("word list".to_string()));
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordProvider for WordListProvider {
    fn random_word(&self) -> Word {
        let index = rand::rng().random_range(0..self.words.len());
        self.words[index].clone()
    }
}

fn parse_words(contents: &str) -> Vec<Word> {
    contents.lines().filter_map(|line| Word::new(line).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_single_word_corpus_always_returns_it() {
        // テスト項目: 単語が一つだけなら常にその単語が選ばれる
        let provider = WordListProvider::from_words(vec![Word::new("kite").unwrap()]).unwrap();
        for _ in 0..10 {
            assert_eq!(provider.random_word().as_str(), "kite");
        }
    }

    #[test]
    fn test_random_word_comes_from_corpus() {
        // テスト項目: 選ばれる単語は必ずリストに含まれ、複数の単語が選ばれうる
        // given (前提条件):
        let provider = WordListProvider::embedded();
        let corpus: HashSet<&str> = provider.words.iter().map(Word::as_str).collect();

        // when (操作):
        let drawn: HashSet<String> = (0..200)
            .map(|_| provider.random_word().as_str().to_string())
            .collect();

        // then (期待する結果):
        assert!(drawn.iter().all(|w| corpus.contains(w.as_str())));
        assert!(drawn.len() > 1);
    }

    #[test]
    fn test_parse_words_strips_trailing_whitespace() {
        // テスト項目: 行末の改行・空白は除去され、空行は読み飛ばされる
        let words = parse_words("apple \nbanana\r\n\n   \ncherry");
        let words: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        // テスト項目: 空の単語リストは読み込みエラーになる
        let result = WordListProvider::from_words(Vec::new());
        assert!(matches!(result, Err(ProviderError::EmptyCorpus(_))));
    }
}
