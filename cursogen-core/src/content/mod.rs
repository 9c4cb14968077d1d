//! Generation of course artifacts: educational content, video scripts and
//! teleprompter texts

mod generator;
pub mod prompts;

pub use generator::{Artifact, ContentGenerator, GenerationConfig, GenerationError};
