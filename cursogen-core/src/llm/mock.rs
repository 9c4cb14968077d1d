//! Mock text-generation backend for testing

#![cfg(test)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::errors::LlmError;
use super::traits::{MockBackend, TextGenerator};
use super::types::SamplingOptions;

/// In-memory backend that replays queued responses and records every call.
///
/// With `echoing()` the backend returns each prompt verbatim when no
/// response is queued, which lets tests assert on prompt contents through
/// the generated artifacts.
#[derive(Clone)]
pub struct MockGenerator {
    name: String,
    model: String,
    responses: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<LlmError>>>,
    call_history: Arc<Mutex<Vec<(String, SamplingOptions)>>>,
    echo: bool,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            model: "mock-model".to_string(),
            responses: Arc::new(Mutex::new(Vec::new())),
            errors: Arc::new(Mutex::new(Vec::new())),
            call_history: Arc::new(Mutex::new(Vec::new())),
            echo: false,
        }
    }

    /// Mock that answers every un-queued call with the prompt itself
    pub fn echoing() -> Self {
        Self { echo: true, ..Self::new() }
    }

    /// Queue an additional response without clearing earlier ones
    pub fn add_response(&self, response: impl Into<String>) {
        self.responses.lock().unwrap().push(response.into());
    }

    /// Queue an additional error without clearing earlier ones
    pub fn add_error(&self, error: LlmError) {
        self.errors.lock().unwrap().push(error);
    }

    pub fn call_count(&self) -> usize {
        self.call_history.lock().unwrap().len()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn generate(&self, prompt: &str, options: &SamplingOptions)
        -> Result<String, LlmError> {
        self.call_history.lock().unwrap().push((prompt.to_string(), options.clone()));

        if let Some(error) = self.errors.lock().unwrap().pop() {
            return Err(error);
        }
        if let Some(response) = self.responses.lock().unwrap().pop() {
            return Ok(response);
        }
        if self.echo {
            return Ok(prompt.to_string());
        }
        Ok("Mock response".to_string())
    }
}

impl MockBackend for MockGenerator {
    fn set_mock_response(&self, response: impl Into<String>) {
        let mut responses = self.responses.lock().unwrap();
        responses.clear();
        responses.push(response.into());
    }

    fn set_mock_error(&self, error: LlmError) {
        let mut errors = self.errors.lock().unwrap();
        errors.clear();
        errors.push(error);
    }

    fn call_history(&self) -> Vec<(String, SamplingOptions)> {
        self.call_history.lock().unwrap().clone()
    }

    fn clear_history(&self) {
        self.call_history.lock().unwrap().clear();
    }
}
