use super::completion_repository::CompletionRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// OpenAI chat completions implementation of the completion repository
pub struct OpenAiCompletionRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    timeout: Duration,
}

impl OpenAiCompletionRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String, timeout: Duration) -> Self {
        Self {
            client,
            model,
            timeout,
        }
    }
}

#[async_trait]
impl CompletionRepository for OpenAiCompletionRepository {
    fn provider(&self) -> &'static str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String, String> {
        tracing::debug!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling OpenAI chat completions"
        );

        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| format!("Failed to build OpenAI message: {}", e))?
            .into();

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(vec![message])
            .build()
            .map_err(|e| format!("Failed to build OpenAI request: {}", e))?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| format!("OpenAI request timed out after {:?}", self.timeout))?
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "OpenAI chat completion failed");
                format!("OpenAI error: {}", e)
            })?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| "OpenAI response contained no text".to_string())
    }
}
