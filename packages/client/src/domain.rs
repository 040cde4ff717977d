//! Domain logic for client-side operations.
//!
//! Pure functions without side effects, kept apart from the I/O code so they
//! are easy to test.

use hiroba_server::usecase::DEFAULT_MAX_COMMENT_CHARS;

use crate::error::ClientError;

/// Longest comment the client sends, in characters
pub const MAX_COMMENT_CHARS: usize = DEFAULT_MAX_COMMENT_CHARS;

/// Check if the client should give up immediately.
///
/// A request the server rejected will be rejected again; retrying is pointless.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(error, ClientError::Rejected { .. })
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The number of failed attempts so far
/// * `max_attempts` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }

    current_attempt < max_attempts
}

/// Trim an input line and cut it to `MAX_COMMENT_CHARS` characters.
///
/// `None` when nothing is left to send.
pub fn normalize_comment(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let truncated: String = trimmed.chars().take(MAX_COMMENT_CHARS).collect();
    Some(truncated.trim_end().to_string())
}

/// Derive the room state stream URL from the HTTP base URL.
///
/// `http://` becomes `ws://` and `https://` becomes `wss://`; a base without a
/// scheme is treated as plain `ws://`.
pub fn watch_url(base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let ws_base = if let Some(rest) = base_url.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base_url.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else if base_url.starts_with("ws://") || base_url.starts_with("wss://") {
        base_url.to_string()
    } else {
        format!("ws://{}", base_url)
    };

    format!("{}/ws/state", ws_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_exit_immediately_when_rejected() {
        // テスト項目: サーバーに拒否されたリクエストは即座に終了すべきと判定される
        // given (前提条件):
        let error = ClientError::Rejected {
            status: 400,
            message: "Display name must not be empty".to_string(),
        };

        // when (操作):
        let result = should_exit_immediately(&error);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_should_exit_immediately_with_connection_lost() {
        // テスト項目: 接続断の場合は即座に終了すべきではないと判定される
        // given (前提条件):
        let error = ClientError::ConnectionLost("reset by peer".to_string());

        // when (操作):
        let result = should_exit_immediately(&error);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_should_attempt_reconnect_within_limit() {
        // テスト項目: 試行回数が上限未満なら再接続を試みる
        // given (前提条件):
        let error = ClientError::ConnectionError("refused".to_string());

        // when (操作):
        let first = should_attempt_reconnect(&error, 0, 5);
        let last = should_attempt_reconnect(&error, 4, 5);

        // then (期待する結果):
        assert!(first);
        assert!(last);
    }

    #[test]
    fn test_should_not_reconnect_after_max_attempts() {
        // テスト項目: 試行回数が上限に達したら再接続しない
        // given (前提条件):
        let error = ClientError::ConnectionError("refused".to_string());

        // when (操作):
        let result = should_attempt_reconnect(&error, 5, 5);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_should_not_reconnect_when_rejected() {
        // テスト項目: 拒否された場合は試行回数に余裕があっても再接続しない
        // given (前提条件):
        let error = ClientError::Rejected {
            status: 404,
            message: "Not Found".to_string(),
        };

        // when (操作):
        let result = should_attempt_reconnect(&error, 0, 5);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_normalize_comment_trims() {
        // テスト項目: 前後の空白が取り除かれる
        // given (前提条件):
        let line = "  hello room \n";

        // when (操作):
        let result = normalize_comment(line);

        // then (期待する結果):
        assert_eq!(result.as_deref(), Some("hello room"));
    }

    #[test]
    fn test_normalize_comment_ignores_blank_line() {
        // テスト項目: 空行や空白のみの行は送信対象にならない
        // given (前提条件):
        let lines = ["", "   ", "\t"];

        // when (操作):
        let results: Vec<_> = lines.iter().map(|line| normalize_comment(line)).collect();

        // then (期待する結果):
        assert!(results.iter().all(Option::is_none));
    }

    #[test]
    fn test_normalize_comment_truncates_long_line() {
        // テスト項目: 上限を超える行は文字数（バイト数ではない）で切り詰められる
        // given (前提条件):
        let ascii = "a".repeat(MAX_COMMENT_CHARS + 10);
        let multibyte = "あ".repeat(MAX_COMMENT_CHARS + 1);

        // when (操作):
        let ascii = normalize_comment(&ascii).unwrap();
        let multibyte = normalize_comment(&multibyte).unwrap();

        // then (期待する結果):
        assert_eq!(MAX_COMMENT_CHARS, 156);
        assert_eq!(ascii.chars().count(), MAX_COMMENT_CHARS);
        assert_eq!(multibyte.chars().count(), MAX_COMMENT_CHARS);
    }

    #[test]
    fn test_normalize_comment_keeps_line_at_limit() {
        // テスト項目: ちょうど上限の行はそのまま送られる
        // given (前提条件):
        let line = "b".repeat(MAX_COMMENT_CHARS);

        // when (操作):
        let result = normalize_comment(&line);

        // then (期待する結果):
        assert_eq!(result, Some(line));
    }

    #[test]
    fn test_watch_url_from_http_base() {
        // テスト項目: http のベース URL から ws のストリーム URL が作られる
        // given (前提条件):
        let base = "http://127.0.0.1:30000/";

        // when (操作):
        let url = watch_url(base);

        // then (期待する結果):
        assert_eq!(url, "ws://127.0.0.1:30000/ws/state");
    }

    #[test]
    fn test_watch_url_from_https_and_bare_host() {
        // テスト項目: https は wss に、スキーム無しは ws として扱われる
        // given (前提条件):
        let secure = "https://chat.example.com";
        let bare = "localhost:30000";

        // when (操作):
        let secure_url = watch_url(secure);
        let bare_url = watch_url(bare);

        // then (期待する結果):
        assert_eq!(secure_url, "wss://chat.example.com/ws/state");
        assert_eq!(bare_url, "ws://localhost:30000/ws/state");
    }
}
