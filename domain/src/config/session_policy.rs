//! Session policy value objects

use serde::{Deserialize, Serialize};

/// What happens to a tool result produced during a conversational round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolResultPolicy {
    /// Show the result to the user only (default)
    Display,
    /// Show it and append it to history so the next round can see it
    Retain,
}

impl Default for ToolResultPolicy {
    fn default() -> Self {
        Self::Display
    }
}

impl ToolResultPolicy {
    pub fn retains(&self) -> bool {
        matches!(self, ToolResultPolicy::Retain)
    }
}

/// How a prompt round talks to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// One-shot request; the whole response must be a call descriptor
    Direct,
    /// Streamed chat over history; the response may embed a call
    Conversational,
}

impl std::fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseMode::Direct => f.write_str("direct"),
            ResponseMode::Conversational => f.write_str("conversational"),
        }
    }
}
