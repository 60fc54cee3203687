//! Logging setup with secret redaction.
//!
//! HTTP client errors can echo request URLs, and the Telegram Bot API puts the
//! bot token in the URL path. Everything written to the log passes through
//! [`RedactionPatterns`] first.

use regex::Regex;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Regex patterns for redacting sensitive data
pub struct RedactionPatterns {
    token_url: Regex,
    token_bare: Regex,
    token_prefixed: Regex,
    openai_key: Regex,
    bearer: Regex,
}

impl RedactionPatterns {
    /// Initialize all regex patterns
    ///
    /// # Errors
    ///
    /// Returns an error if any regex pattern is invalid
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            token_url: Regex::new(r"(https?://[^/]+/bot)([0-9]+:[A-Za-z0-9_-]+)(/[^'\s]*)")?,
            token_bare: Regex::new(r"([0-9]{8,10}:[A-Za-z0-9_-]{35})")?,
            token_prefixed: Regex::new(r"(bot[0-9]{8,10}:)[A-Za-z0-9_-]+")?,
            openai_key: Regex::new(r"sk-[A-Za-z0-9_-]{16,}")?,
            bearer: Regex::new(r"(?i)(bearer\s+)[A-Za-z0-9._-]+")?,
        })
    }

    /// Replace every secret found in `input` with a placeholder
    #[must_use]
    pub fn redact(&self, input: &str) -> String {
        let mut output = self
            .token_url
            .replace_all(input, "$1[TELEGRAM_TOKEN]$3")
            .to_string();
        output = self
            .token_bare
            .replace_all(&output, "[TELEGRAM_TOKEN]")
            .to_string();
        output = self
            .token_prefixed
            .replace_all(&output, "$1[TELEGRAM_TOKEN]")
            .to_string();
        output = self
            .openai_key
            .replace_all(&output, "[OPENAI_API_KEY]")
            .to_string();
        output = self.bearer.replace_all(&output, "$1[MASKED]").to_string();
        output
    }
}

/// Writer that redacts secrets before forwarding to `inner`
pub struct RedactingWriter<W: Write> {
    inner: W,
    patterns: Arc<RedactionPatterns>,
}

impl<W: Write> RedactingWriter<W> {
    const fn new(inner: W, patterns: Arc<RedactionPatterns>) -> Self {
        Self { inner, patterns }
    }
}

impl<W: Write> Write for RedactingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        let redacted = self.patterns.redact(&s);
        self.inner.write_all(redacted.as_bytes())?;
        // Report the original length; the redacted text may differ in size.
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// `MakeWriter` that wraps every writer it produces with redaction
pub struct RedactingMakeWriter<F> {
    make_inner: F,
    patterns: Arc<RedactionPatterns>,
}

impl<F> RedactingMakeWriter<F> {
    /// Wrap `make_inner` so its output is redacted with `patterns`
    pub const fn new(make_inner: F, patterns: Arc<RedactionPatterns>) -> Self {
        Self {
            make_inner,
            patterns,
        }
    }
}

impl<'a, F, W> tracing_subscriber::fmt::MakeWriter<'a> for RedactingMakeWriter<F>
where
    F: Fn() -> W + 'static,
    W: Write,
{
    type Writer = RedactingWriter<W>;

    fn make_writer(&'a self) -> Self::Writer {
        RedactingWriter::new((self.make_inner)(), self.patterns.clone())
    }
}

/// Install the global subscriber: `RUST_LOG` filter (default `info`),
/// redacted output on stderr.
pub fn init_logging(patterns: Arc<RedactionPatterns>) {
    let make_writer = RedactingMakeWriter::new(io::stderr, patterns);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(make_writer))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "123456789:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsawq";

    #[test]
    fn test_redacts_token_in_url() -> Result<(), regex::Error> {
        let patterns = RedactionPatterns::new()?;
        let line = format!("error sending request for url (https://api.telegram.org/bot{TOKEN}/sendMessage)");
        let redacted = patterns.redact(&line);
        assert!(!redacted.contains(TOKEN));
        assert!(redacted.contains("https://api.telegram.org/bot[TELEGRAM_TOKEN]/sendMessage"));
        Ok(())
    }

    #[test]
    fn test_redacts_bare_token() -> Result<(), regex::Error> {
        let patterns = RedactionPatterns::new()?;
        let redacted = patterns.redact(&format!("token={TOKEN}"));
        assert_eq!(redacted, "token=[TELEGRAM_TOKEN]");
        Ok(())
    }

    #[test]
    fn test_redacts_openai_key() -> Result<(), regex::Error> {
        let patterns = RedactionPatterns::new()?;
        let redacted = patterns.redact("Incorrect API key provided: sk-proj-abcdefghijklmnop1234");
        assert_eq!(redacted, "Incorrect API key provided: [OPENAI_API_KEY]");

        let redacted = patterns.redact("Authorization: Bearer abc.def-123");
        assert_eq!(redacted, "Authorization: Bearer [MASKED]");
        Ok(())
    }

    #[test]
    fn test_leaves_plain_text() -> Result<(), regex::Error> {
        let patterns = RedactionPatterns::new()?;
        let line = "Conversation state changed chat_id=1001 to=AwaitingSubject";
        assert_eq!(patterns.redact(line), line);
        Ok(())
    }

    #[test]
    fn test_writer_redacts_and_reports_full_length() -> io::Result<()> {
        let patterns = Arc::new(
            RedactionPatterns::new().map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
        );
        let mut writer = RedactingWriter::new(Vec::new(), patterns);

        let input = format!("bot{TOKEN}");
        let written = writer.write(input.as_bytes())?;
        assert_eq!(written, input.len());

        let output = String::from_utf8_lossy(&writer.inner).to_string();
        assert!(!output.contains(TOKEN));
        Ok(())
    }
}
