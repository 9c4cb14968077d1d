//! Ollama-backed text generation
//!
//! Talks to a local Ollama daemon over its completion API. The model is
//! pulled on first use if the daemon does not have it yet.

use async_trait::async_trait;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::models::ModelOptions;
use ollama_rs::Ollama;
use tracing::{debug, info};

use crate::config::OllamaConfig;

use super::errors::{LlmError, LlmResult};
use super::traits::TextGenerator;
use super::types::SamplingOptions;

pub struct OllamaGenerator {
    client: Ollama,
    model_name: String,
}

impl OllamaGenerator {
    pub fn new(config: OllamaConfig) -> Self {
        let protocol = if config.use_https { "https" } else { "http" };
        let url = format!("{}://{}", protocol, config.host);
        let client = Ollama::new(url, config.port);
        Self { client, model_name: config.model }
    }

    /// Override the model configured at construction time
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    fn convert_options(&self, options: &SamplingOptions) -> ModelOptions {
        let mut model_options = ModelOptions::default();

        if let Some(temperature) = options.temperature {
            model_options = model_options.temperature(temperature);
        }
        if let Some(max_tokens) = options.max_tokens {
            model_options = model_options.num_predict(max_tokens.min(i32::MAX as usize) as i32);
        }
        if let Some(top_p) = options.top_p {
            model_options = model_options.top_p(top_p);
        }
        if let Some(ref stop) = options.stop {
            model_options = model_options.stop(stop.clone());
        }

        model_options
    }

    async fn is_model_available(&self, model: &str) -> LlmResult<bool> {
        let models = self
            .client
            .list_local_models()
            .await
            .map_err(|e| LlmError::network(e.to_string()))?;
        Ok(models.iter().any(|m| m.name == model || m.name.starts_with(&format!("{model}:"))))
    }

    /// Pull the model if the daemon does not have it locally yet
    async fn ensure_model(&self, model: &str) -> LlmResult<()> {
        if self.is_model_available(model).await? {
            return Ok(());
        }

        info!("Model {} not found locally, pulling...", model);
        self.client
            .pull_model(model.to_string(), false)
            .await
            .map_err(|_| LlmError::model_not_found(model))?;

        Ok(())
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model_name
    }

    async fn is_available(&self) -> bool {
        self.client.list_local_models().await.is_ok()
    }

    async fn generate(&self, prompt: &str, options: &SamplingOptions)
        -> Result<String, LlmError> {
        self.ensure_model(&self.model_name).await?;

        debug!("Sending {} chars of prompt to {}", prompt.len(), self.model_name);
        let request = GenerationRequest::new(self.model_name.clone(), prompt.to_string())
            .options(self.convert_options(options));

        let response = self
            .client
            .generate(request)
            .await
            .map_err(|e| LlmError::backend("ollama", e.to_string()))?;

        if response.response.trim().is_empty() {
            return Err(LlmError::empty_response(&self.model_name));
        }

        Ok(response.response)
    }
}
