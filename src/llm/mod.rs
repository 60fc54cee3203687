//! LLM providers
//!
//! Answers student questions through an OpenAI-compatible chat completion API.

/// Implementations of specific LLM providers
pub mod providers;

use thiserror::Error;
use tracing::warn;

pub use providers::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LlmError {
    /// Error returned by the provider's API
    #[error("API error: {0}")]
    ApiError(String),
    /// Error during network communication
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Any other unexpected error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Interface for question-answering providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Answer a single-turn question, returning the top completion's text
    async fn answer(&self, question: &str) -> Result<String, LlmError>;
}

/// Ask `provider` for an answer, logging failures.
///
/// A single attempt is made; the caller decides how to present an error.
pub async fn fetch_answer(provider: &dyn AnswerProvider, question: &str) -> Result<String, LlmError> {
    let result = provider.answer(question).await;
    if let Err(e) = &result {
        warn!("Failed to fetch answer: {e}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_answer_passes_through() {
        let mut provider = MockAnswerProvider::new();
        provider
            .expect_answer()
            .withf(|q| q == "What is 6*7?")
            .times(1)
            .returning(|_| Ok("42".to_string()));

        let answer = fetch_answer(&provider, "What is 6*7?").await;
        assert_eq!(answer.ok().as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_fetch_answer_keeps_error_detail() {
        let mut provider = MockAnswerProvider::new();
        provider
            .expect_answer()
            .times(1)
            .returning(|_| Err(LlmError::ApiError("quota exceeded".to_string())));

        match fetch_answer(&provider, "x").await {
            Err(LlmError::ApiError(detail)) => assert_eq!(detail, "quota exceeded"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
