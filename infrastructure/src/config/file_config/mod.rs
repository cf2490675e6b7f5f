//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod model;
mod output;
mod repl;
mod session;

pub use api::FileApiConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("model.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model.name cannot be empty")]
    EmptyModelName,

    #[error("model.host cannot be empty")]
    EmptyHost,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model runtime settings
    pub model: FileModelConfig,
    /// Interactive session behavior
    pub session: FileSessionConfig,
    /// External API endpoints
    pub api: FileApiConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.model.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHost);
        }
        if self.model.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolcall_domain::{EmbeddedStrategy, Model, ToolResultPolicy};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[model]
name = "qwen2.5"
host = "http://gpu-box:11434"
timeout_seconds = 120

[session]
tool_results = "retain"
keep_system_turn = false
brace_fallback = true

[api]
search_url = "http://localhost:8080/search"

[repl]
history_file = "~/.toolcall_history"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.model(), Model::Qwen25);
        assert_eq!(config.model.host, "http://gpu-box:11434");
        assert_eq!(config.model.timeout().unwrap().as_secs(), 120);
        assert_eq!(config.session.tool_results, ToolResultPolicy::Retain);
        assert!(!config.session.keep_system_turn);
        assert_eq!(
            config.session.embedded_strategy(),
            EmbeddedStrategy::DelimitedThenBraces
        );
        assert_eq!(config.api.search_url, "http://localhost:8080/search");
        assert_eq!(config.api.weather_url, FileApiConfig::default().weather_url);
        assert_eq!(config.repl.history_file.as_deref(), Some("~/.toolcall_history"));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[model]\nname = \"mistral\"\n").unwrap();
        assert_eq!(config.model.model(), Model::Mistral);
        // Defaults should apply
        assert_eq!(config.model.host, "http://localhost:11434");
        assert_eq!(config.session, FileSessionConfig::default());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.model.name, "llama3.2");
        assert_eq!(config.session.tool_results, ToolResultPolicy::Display);
        assert!(config.session.keep_system_turn);
        assert_eq!(config.session.embedded_strategy(), EmbeddedStrategy::Delimited);
        assert!(config.output.color);
        assert!(config.repl.history_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_tool_result_policy_is_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[session]\ntool_results = \"forget\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = FileConfig::default();
        config.model.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.model.name = "  ".into();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }
}
