//! Display-time partition of the comment history.

use std::collections::HashSet;

use chathub_server::infrastructure::dto::payload::CommentDto;

/// Comments split for display, each list newest-first.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    /// First comment of each user whose text contains a digit
    pub priority: Vec<&'a CommentDto>,
    /// First comment of each remaining user
    pub general: Vec<&'a CommentDto>,
}

/// Keep the first comment per user (case-insensitive, trimmed, blank names
/// dropped) and route it by whether its text contains an ASCII digit.
///
/// `comments` must be in arrival order. The result borrows from it and is
/// rebuilt from scratch on every call.
pub fn partition(comments: &[CommentDto]) -> Partition<'_> {
    let mut seen = HashSet::new();
    let mut view = Partition::default();

    for comment in comments {
        let key = comment.user_name.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        if comment.text.chars().any(|c| c.is_ascii_digit()) {
            view.priority.push(comment);
        } else {
            view.general.push(comment);
        }
    }

    view.priority.reverse();
    view.general.reverse();
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, user_name: &str, text: &str) -> CommentDto {
        CommentDto {
            id: id.to_string(),
            user_name: user_name.to_string(),
            text: text.to_string(),
            worker_id: "unknown".to_string(),
            timestamp: "2025-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn ids(list: &[&CommentDto]) -> Vec<String> {
        list.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_partition_routes_by_digit() {
        // テスト項目: 数字を含むコメントは priority、それ以外は general に振り分けられる
        // given (前提条件):
        let comments = vec![
            comment("1", "alice", "hello"),
            comment("2", "bob", "room 42 please"),
        ];

        // when (操作):
        let view = partition(&comments);

        // then (期待する結果):
        assert_eq!(ids(&view.general), vec!["1"]);
        assert_eq!(ids(&view.priority), vec!["2"]);
    }

    #[test]
    fn test_partition_keeps_first_comment_per_user() {
        // テスト項目: 同一ユーザー（大文字小文字・前後空白を無視）は最初のコメントのみ残る
        // given (前提条件):
        let comments = vec![
            comment("1", "Alice", "first"),
            comment("2", " alice ", "second 2"),
            comment("3", "ALICE", "third"),
        ];

        // when (操作):
        let view = partition(&comments);

        // then (期待する結果):
        assert_eq!(ids(&view.general), vec!["1"]);
        assert!(view.priority.is_empty());
    }

    #[test]
    fn test_partition_skips_blank_names() {
        // テスト項目: 空白のみのユーザー名のコメントは表示されない
        // given (前提条件):
        let comments = vec![comment("1", "   ", "ghost 1"), comment("2", "", "ghost")];

        // when (操作):
        let view = partition(&comments);

        // then (期待する結果):
        assert_eq!(view, Partition::default());
    }

    #[test]
    fn test_partition_lists_are_newest_first() {
        // テスト項目: 各リストは新しい順に並ぶ
        // given (前提条件):
        let comments = vec![
            comment("1", "a", "x"),
            comment("2", "b", "1"),
            comment("3", "c", "y"),
            comment("4", "d", "2"),
        ];

        // when (操作):
        let view = partition(&comments);

        // then (期待する結果):
        assert_eq!(ids(&view.general), vec!["3", "1"]);
        assert_eq!(ids(&view.priority), vec!["4", "2"]);
    }

    #[test]
    fn test_partition_non_ascii_digits_are_general() {
        // テスト項目: 全角数字は数字として扱わない
        // given (前提条件):
        let comments = vec![comment("1", "yuki", "３番")];

        // when (操作):
        let view = partition(&comments);

        // then (期待する結果):
        assert_eq!(ids(&view.general), vec!["1"]);
    }
}
