//! Application configuration
//!
//! Everything has a working default, so a config file is only needed to
//! point at a non-local Ollama daemon or to tune sampling.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::content::GenerationConfig;

/// Connection settings for the Ollama daemon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    pub host: String,
    pub port: u16,
    pub use_https: bool,
    /// Model used for all three artifacts
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 11434,
            use_https: false,
            model: "mistral".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the course store
    pub data_dir: PathBuf,

    pub ollama: OllamaConfig,

    pub generation: GenerationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".cursogen/courses"),
            ollama: OllamaConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl AppConfig {
    pub const DEFAULT_PATH: &'static str = ".cursogen/config.toml";

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load the default config file if present, otherwise use built-in
    /// defaults
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(Self::DEFAULT_PATH);
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
