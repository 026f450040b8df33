//! Parsing of interactive input lines.

use thiserror::Error;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<user>: <text>`
    Comment { user_name: String, text: String },
    /// `/job <url>`
    Job(String),
    /// `/jobs`
    PendingJobs,
    /// `/clear`
    Clear,
    /// `/view`
    View,
    /// `/workers`
    Workers,
    /// `/help`
    Help,
}

/// Why a line could not be turned into a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try /help)")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    MissingArgument(&'static str),
    #[error("expected '<user>: <text>' or a /command")]
    NotAComment,
}

/// Parse a trimmed, non-empty input line.
///
/// The user/text split happens at the first `:` so texts may contain colons.
/// Empty halves are passed through; the server decides whether they are valid.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix('/') {
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        return match name {
            "job" if arg.is_empty() => Err(ParseError::MissingArgument("/job <url>")),
            "job" => Ok(Command::Job(arg.to_string())),
            "jobs" => Ok(Command::PendingJobs),
            "clear" => Ok(Command::Clear),
            "view" => Ok(Command::View),
            "workers" => Ok(Command::Workers),
            "help" => Ok(Command::Help),
            other => Err(ParseError::UnknownCommand(format!("/{}", other))),
        };
    }

    match line.split_once(':') {
        Some((user_name, text)) => Ok(Command::Comment {
            user_name: user_name.trim().to_string(),
            text: text.trim().to_string(),
        }),
        None => Err(ParseError::NotAComment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comment() {
        // テスト項目: "<user>: <text>" がコメントとして解釈される
        // given (前提条件):
        let line = "Alice: hello there";

        // when (操作):
        let result = parse(line);

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(Command::Comment {
                user_name: "Alice".to_string(),
                text: "hello there".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_comment_keeps_colons_in_text() {
        // テスト項目: 2 つ目以降のコロンは本文の一部として扱われる
        // given (前提条件):
        let line = "Bob: time is 12:30";

        // when (操作):
        let result = parse(line);

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(Command::Comment {
                user_name: "Bob".to_string(),
                text: "time is 12:30".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_job_with_url() {
        // テスト項目: "/job <url>" がジョブ作成として解釈される
        // given (前提条件):
        let line = "/job https://www.youtube.com/watch?v=abc";

        // when (操作):
        let result = parse(line);

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(Command::Job("https://www.youtube.com/watch?v=abc".to_string()))
        );
    }

    #[test]
    fn test_parse_job_without_url() {
        // テスト項目: URL 無しの /job は使い方エラーになる
        // given (前提条件):
        let line = "/job";

        // when (操作):
        let result = parse(line);

        // then (期待する結果):
        assert_eq!(result, Err(ParseError::MissingArgument("/job <url>")));
    }

    #[test]
    fn test_parse_simple_commands() {
        // テスト項目: 引数無しのコマンドがそれぞれ解釈される
        assert_eq!(parse("/jobs"), Ok(Command::PendingJobs));
        assert_eq!(parse("/clear"), Ok(Command::Clear));
        assert_eq!(parse("/view"), Ok(Command::View));
        assert_eq!(parse("/workers"), Ok(Command::Workers));
        assert_eq!(parse("/help"), Ok(Command::Help));
    }

    #[test]
    fn test_parse_unknown_command() {
        // テスト項目: 未知のコマンドはエラーになる
        // given (前提条件):
        let line = "/frobnicate now";

        // when (操作):
        let result = parse(line);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ParseError::UnknownCommand("/frobnicate".to_string()))
        );
    }

    #[test]
    fn test_parse_plain_text_is_rejected() {
        // テスト項目: コロンを含まない通常テキストはエラーになる
        assert_eq!(parse("just some words"), Err(ParseError::NotAComment));
    }

    #[test]
    fn test_parse_error_messages() {
        // テスト項目: 解釈エラーが利用者向けのメッセージとして表示される
        // given (前提条件):
        let unknown = parse("/frobnicate").unwrap_err();
        let missing = parse("/job").unwrap_err();
        let plain = parse("hello").unwrap_err();

        // when (操作):
        let messages = [unknown.to_string(), missing.to_string(), plain.to_string()];

        // then (期待する結果):
        assert_eq!(
            messages,
            [
                "unknown command '/frobnicate' (try /help)".to_string(),
                "usage: /job <url>".to_string(),
                "expected '<user>: <text>' or a /command".to_string(),
            ]
        );
    }
}
