//! Session configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use toolcall_domain::{EmbeddedStrategy, ToolResultPolicy};

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// `"display"` or `"retain"`
    pub tool_results: ToolResultPolicy,
    /// Keep the system instruction as a permanent first turn
    pub keep_system_turn: bool,
    /// Also scan for bare `{...}` calls when a response has no start marker
    pub brace_fallback: bool,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            tool_results: ToolResultPolicy::default(),
            keep_system_turn: true,
            brace_fallback: false,
        }
    }
}

impl FileSessionConfig {
    pub fn embedded_strategy(&self) -> EmbeddedStrategy {
        if self.brace_fallback {
            EmbeddedStrategy::DelimitedThenBraces
        } else {
            EmbeddedStrategy::Delimited
        }
    }
}
