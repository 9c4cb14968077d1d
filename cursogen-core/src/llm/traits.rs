//! Core trait for text-generation backends

use async_trait::async_trait;

use super::errors::LlmError;
use super::types::SamplingOptions;

/// A text-generation backend: prompt in, generated text out.
///
/// The pipeline only ever talks to this trait, so a local Ollama daemon,
/// a remote API or an in-memory mock are interchangeable.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &str;

    /// Model identifier the backend generates with
    fn model(&self) -> &str;

    /// Whether the backend can currently serve requests
    async fn is_available(&self) -> bool;

    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str, options: &SamplingOptions)
        -> Result<String, LlmError>;
}

/// Extra hooks exposed by mock backends in tests
#[cfg(test)]
pub trait MockBackend: TextGenerator {
    fn set_mock_response(&self, response: impl Into<String>);
    fn set_mock_error(&self, error: LlmError);
    fn call_history(&self) -> Vec<(String, SamplingOptions)>;
    fn clear_history(&self);
}
