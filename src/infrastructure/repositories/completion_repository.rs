use async_trait::async_trait;

/// Repository for remote text generation.
/// Abstracts the underlying provider (Gemini, OpenAI, etc.)
///
/// Implementations are responsible for:
/// - Provider authentication and transport
/// - Mapping a single prompt to the provider's request format
/// - Extracting the generated text from the provider's response
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Short provider name used in logs and API responses
    fn provider(&self) -> &'static str;

    /// Generate text for a prompt
    ///
    /// # Errors
    /// Returns error if the request fails, the provider answers with a
    /// non-success status, or the response carries no text
    async fn generate(&self, prompt: &str) -> Result<String, String>;
}
