//! File-based configuration types.

use loom_domain::Model;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors validating a loaded configuration.
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("Invalid model in config: {0}")]
    InvalidModel(String),
}

/// Configuration loaded from `storyloom.toml` / the global config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model identifier ("gemini-1.5-flash" or "gemini-1.5-pro").
    pub model: String,
    /// Pacing delay between displayed fragments, in milliseconds.
    pub pacing_ms: u64,
    /// How many history records the display window shows.
    pub history_display: usize,
    /// Optional JSONL conversation log path.
    pub conversation_log: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            pacing_ms: 30,
            history_display: 10,
            conversation_log: None,
        }
    }
}

impl FileConfig {
    /// Parse the configured model identifier into the domain value object.
    pub fn resolve_model(&self) -> Result<Model, ConfigValidationError> {
        self.model
            .parse()
            .map_err(|_| ConfigValidationError::InvalidModel(self.model.clone()))
    }
}
