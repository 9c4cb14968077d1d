//! Text-generation backend layer
//!
//! Everything above this module treats generation as "prompt in, text out"
//! through the [`TextGenerator`] trait. The default production backend is a
//! local Ollama daemon; tests swap in an in-memory mock.

pub mod errors;
mod mock;
pub mod ollama;
pub mod traits;
pub mod types;

pub use errors::{LlmError, LlmResult};
pub use ollama::OllamaGenerator;
pub use traits::TextGenerator;
pub use types::SamplingOptions;

#[cfg(test)]
pub(crate) use mock::MockGenerator;
