//! Utility functions shared by the transport layer.

use anyhow::Result;
use std::time::Duration;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;
use tracing::warn;

/// Split a message into parts of at most `max_chars` characters.
///
/// Parts break on line boundaries where possible; a single line longer than
/// the limit is cut on character boundaries. Counting is by `char`, so
/// multi-byte text never splits inside a code point.
///
/// # Examples
///
/// ```
/// use board_prep_bot::utils::split_long_message;
///
/// assert_eq!(split_long_message("short", 4000), vec!["short".to_string()]);
/// assert!(split_long_message("", 4000).is_empty());
/// ```
#[must_use]
pub fn split_long_message(message: &str, max_chars: usize) -> Vec<String> {
    if message.is_empty() || max_chars == 0 {
        return Vec::new();
    }

    if message.chars().count() <= max_chars {
        return vec![message.to_string()];
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in message.lines() {
        let line_len = line.chars().count();

        // +1 for the newline that joins it to the current part
        if current_len > 0 && current_len + 1 + line_len > max_chars {
            parts.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len > max_chars {
            let chars: Vec<char> = line.chars().collect();
            let mut chunks = chars.chunks(max_chars).peekable();
            while let Some(chunk) = chunks.next() {
                let piece: String = chunk.iter().collect();
                if chunks.peek().is_some() {
                    parts.push(piece);
                } else {
                    current_len = chunk.len();
                    current = piece;
                }
            }
            continue;
        }

        if current_len > 0 {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

/// Retry a Telegram API operation with exponential backoff.
///
/// Used for outbound sends so that a transient network error does not drop a
/// reply. The strategy adds jitter between attempts.
///
/// # Errors
///
/// Returns the last error if all attempts fail.
///
/// # Examples
///
/// ```no_run
/// use board_prep_bot::utils::retry_telegram_operation;
/// use anyhow::Result;
///
/// async fn send() -> Result<()> {
///     Ok(())
/// }
///
/// # async fn example() -> Result<()> {
/// retry_telegram_operation(|| async { send().await }).await?;
/// # Ok(())
/// # }
/// ```
pub async fn retry_telegram_operation<F, Fut, T>(operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    use crate::config::{
        TELEGRAM_API_INITIAL_BACKOFF_MS, TELEGRAM_API_MAX_BACKOFF_MS, TELEGRAM_API_MAX_RETRIES,
    };

    let retry_strategy = ExponentialBackoff::from_millis(TELEGRAM_API_INITIAL_BACKOFF_MS)
        .max_delay(Duration::from_millis(TELEGRAM_API_MAX_BACKOFF_MS))
        .map(jitter)
        .take(TELEGRAM_API_MAX_RETRIES);

    Retry::spawn(retry_strategy, operation).await.map_err(|e| {
        warn!(
            "Telegram API operation failed after {} attempts: {}",
            TELEGRAM_API_MAX_RETRIES, e
        );
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_split_respects_limit_and_lines() {
        let message = "aaaa\nbbbb\ncccc";
        assert_eq!(split_long_message(message, 9), vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_split_long_line_hard_cut() {
        let parts = split_long_message("abcdefghij", 4);
        assert_eq!(parts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_split_counts_chars_not_bytes() {
        let message = "Привет мир";
        assert_eq!(split_long_message(message, 10), vec![message.to_string()]);

        let parts = split_long_message("ППППП", 2);
        assert_eq!(parts, vec!["ПП", "ПП", "П"]);
    }

    #[test]
    fn test_split_parts_never_exceed_limit() {
        let message = "line one\n".repeat(1000) + &"x".repeat(5000);
        for part in split_long_message(&message, 4000) {
            assert!(part.chars().count() <= 4000);
        }
    }

    #[tokio::test]
    async fn test_retry_recovers_from_transient_error() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let value = retry_telegram_operation(move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    anyhow::bail!("connection reset");
                }
                Ok(7)
            }
        })
        .await?;

        assert_eq!(value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_retry_gives_up() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let result: Result<()> = retry_telegram_operation(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                anyhow::bail!("still down")
            }
        })
        .await;

        assert!(result.is_err());
        // First attempt plus TELEGRAM_API_MAX_RETRIES retries
        assert_eq!(
            calls.load(Ordering::SeqCst),
            crate::config::TELEGRAM_API_MAX_RETRIES + 1
        );
    }
}
