//! Artifact generation on top of a text-generation backend

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::llm::{LlmError, SamplingOptions, TextGenerator};
use crate::model::{MetadadosCurso, Modulo, NucleoConceitual};

use super::prompts;

/// The three artifacts generated per topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Conteudo,
    VideoScript,
    Teleprompter,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conteudo => write!(f, "content"),
            Self::VideoScript => write!(f, "video script"),
            Self::Teleprompter => write!(f, "teleprompter text"),
        }
    }
}

/// A backend failure, annotated with which artifact of which topic was
/// being generated
#[derive(Debug, Error)]
#[error("Failed to generate {artifact} for '{topic}': {source}")]
pub struct GenerationError {
    pub artifact: Artifact,
    pub topic: String,
    #[source]
    pub source: LlmError,
}

/// Sampling settings per artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub conteudo: SamplingOptions,
    pub video_script: SamplingOptions,
    pub teleprompter: SamplingOptions,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            conteudo: SamplingOptions::default(),
            video_script: SamplingOptions::with_temperature(0.75),
            teleprompter: SamplingOptions::default(),
        }
    }
}

/// Generates the course artifacts through whatever backend it is handed
pub struct ContentGenerator {
    backend: Arc<dyn TextGenerator>,
    config: GenerationConfig,
}

impl ContentGenerator {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self::with_config(backend, GenerationConfig::default())
    }

    pub fn with_config(backend: Arc<dyn TextGenerator>, config: GenerationConfig) -> Self {
        Self { backend, config }
    }

    /// Generate the educational content for one topic
    pub async fn generate_conteudo(
        &self,
        metadata: &MetadadosCurso,
        modulo: &Modulo,
        nucleo: &NucleoConceitual,
    ) -> Result<String, GenerationError> {
        let prompt = prompts::conteudo_prompt(metadata, modulo, nucleo);
        self.generate(Artifact::Conteudo, &nucleo.titulo, &prompt, &self.config.conteudo).await
    }

    /// Generate the video script for one topic
    pub async fn generate_video_script(
        &self,
        metadata: &MetadadosCurso,
        modulo: &Modulo,
        nucleo: &NucleoConceitual,
    ) -> Result<String, GenerationError> {
        let prompt = prompts::video_script_prompt(metadata, modulo, nucleo);
        self.generate(Artifact::VideoScript, &nucleo.titulo, &prompt, &self.config.video_script)
            .await
    }

    /// Generate the teleprompter text for one topic from its already
    /// generated content
    pub async fn generate_teleprompter(
        &self,
        metadata: &MetadadosCurso,
        modulo: &Modulo,
        nucleo: &NucleoConceitual,
        conteudo: &str,
    ) -> Result<String, GenerationError> {
        let prompt = prompts::teleprompter_prompt(metadata, modulo, nucleo, conteudo);
        self.generate(Artifact::Teleprompter, &nucleo.titulo, &prompt, &self.config.teleprompter)
            .await
    }

    async fn generate(
        &self,
        artifact: Artifact,
        topic: &str,
        prompt: &str,
        options: &SamplingOptions,
    ) -> Result<String, GenerationError> {
        debug!("Generating {} for topic '{}' via {}", artifact, topic, self.backend.name());
        self.backend.generate(prompt, options).await.map_err(|source| GenerationError {
            artifact,
            topic: topic.to_string(),
            source,
        })
    }
}
