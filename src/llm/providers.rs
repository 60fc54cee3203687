use super::{AnswerProvider, LlmError};
use crate::config::Settings;
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Provider backed by the `OpenAI` chat completions API (or a compatible one)
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiProvider {
    /// Create a provider for `model`, optionally pointing at a custom API base.
    #[must_use]
    pub fn new(api_key: String, api_base: Option<String>, model: String) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }
        Self {
            client: Client::with_config(config),
            model,
        }
    }

    /// Create a provider from application settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.openai_api_key.clone(),
            settings.openai_api_base.clone(),
            settings.openai_model.clone(),
        )
    }

    /// Model identifier sent with each request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Build a single-turn chat completion request for `question`.
///
/// # Errors
///
/// Returns `LlmError::Unknown` if the request cannot be built.
pub fn build_request(model: &str, question: &str) -> Result<CreateChatCompletionRequest, LlmError> {
    let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
        .content(question)
        .build()
        .map_err(|e| LlmError::Unknown(e.to_string()))?
        .into();

    CreateChatCompletionRequestArgs::default()
        .model(model)
        .messages(vec![message])
        .build()
        .map_err(|e| LlmError::Unknown(e.to_string()))
}

/// Extract text content from the first choice of a chat completion response
///
/// # Errors
///
/// Returns `LlmError::ApiError` if the response has no content.
pub fn extract_response(response: &CreateChatCompletionResponse) -> Result<String, LlmError> {
    response
        .choices
        .first()
        .and_then(|c| c.message.content.clone())
        .ok_or_else(|| LlmError::ApiError("Empty response".to_string()))
}

fn map_openai_error(e: OpenAIError) -> LlmError {
    match e {
        OpenAIError::Reqwest(err) => LlmError::NetworkError(err.to_string()),
        other => LlmError::ApiError(other.to_string()),
    }
}

#[async_trait]
impl AnswerProvider for OpenAiProvider {
    #[instrument(skip(self, question), fields(model = %self.model, question_len = question.len()))]
    async fn answer(&self, question: &str) -> Result<String, LlmError> {
        let request = build_request(&self.model, question)?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        debug!(choices = response.choices.len(), "Chat completion received");
        extract_response(&response)
    }
}
