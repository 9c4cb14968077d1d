//! Error types for text-generation backends

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling a generation backend
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    #[error("Model {model} returned an empty response")]
    EmptyResponse { model: String },

    #[error("Backend error from {backend}: {message}")]
    BackendError { backend: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl LlmError {
    pub fn timeout(duration: Duration) -> Self {
        Self::Timeout { duration }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError { message: message.into() }
    }

    pub fn model_not_found(model: impl Into<String>) -> Self {
        Self::ModelNotFound { model: model.into() }
    }

    pub fn empty_response(model: impl Into<String>) -> Self {
        Self::EmptyResponse { model: model.into() }
    }

    pub fn backend(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BackendError { backend: backend.into(), message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigurationError { message: message.into() }
    }
}

impl From<std::io::Error> for LlmError {
    fn from(err: std::io::Error) -> Self {
        Self::NetworkError { message: err.to_string() }
    }
}

/// Result alias for backend operations
pub type LlmResult<T> = Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LlmError::model_not_found("mistral");
        assert_eq!(err.to_string(), "Model not found: mistral");

        let err = LlmError::empty_response("mistral");
        assert_eq!(err.to_string(), "Model mistral returned an empty response");

        let err = LlmError::backend("ollama", "connection refused");
        assert_eq!(err.to_string(), "Backend error from ollama: connection refused");
    }

    #[test]
    fn test_timeout_display() {
        let err = LlmError::timeout(Duration::from_secs(30));
        assert!(err.to_string().contains("30s"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: LlmError = io_err.into();
        assert!(matches!(err, LlmError::NetworkError { .. }));
    }
}
