//! Model runtime configuration from TOML (`[model]` section)

use crate::ollama::DEFAULT_HOST;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use toolcall_domain::Model;

/// Raw model configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model name as understood by the runtime
    pub name: String,
    /// Base URL of the Ollama server
    pub host: String,
    /// Overall request timeout in seconds (none by default)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
            host: DEFAULT_HOST.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileModelConfig {
    pub fn model(&self) -> Model {
        Model::from(self.name.as_str())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
