//! Chat history.

use std::collections::VecDeque;

/// Default number of chat lines kept per session.
pub const DEFAULT_CHAT_HISTORY_LIMIT: usize = 200;

/// Formatted chat lines, oldest first.
///
/// With a limit set, the oldest lines are evicted once it is exceeded.
#[derive(Debug, Clone)]
pub struct ChatHistory {
    entries: VecDeque<String>,
    limit: Option<usize>,
}

impl ChatHistory {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, line: String) {
        self.entries.push_back(line);
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new(Some(DEFAULT_CHAT_HISTORY_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest_past_limit() {
        // テスト項目: 上限を超えると古い行から削除される
        // given (前提条件):
        let mut history = ChatHistory::new(Some(2));

        // when (操作):
        history.push("a: 1".to_string());
        history.push("b: 2".to_string());
        history.push("c: 3".to_string());

        // then (期待する結果):
        assert_eq!(history.entries().collect::<Vec<_>>(), vec!["b: 2", "c: 3"]);
    }

    #[test]
    fn test_unbounded_history_keeps_everything() {
        // テスト項目: 上限なしの場合は全ての行が保持される
        // given (前提条件):
        let mut history = ChatHistory::new(None);

        // when (操作):
        for i in 0..(DEFAULT_CHAT_HISTORY_LIMIT + 5) {
            history.push(format!("x: {i}"));
        }

        // then (期待する結果):
        assert_eq!(history.len(), DEFAULT_CHAT_HISTORY_LIMIT + 5);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        // テスト項目: 上限 0 では何も保持されない
        let mut history = ChatHistory::new(Some(0));
        history.push("a: hi".to_string());
        assert!(history.is_empty());
    }
}
