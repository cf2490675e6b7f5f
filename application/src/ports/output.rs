//! Chat output port
//!
//! Receives everything a prompt round or session produces for the user.
//! Implementations live in the presentation layer.

use toolcall_domain::{CallDescriptor, ToolDescriptor, ToolError};

/// Sink for streamed text and tool activity
pub trait ChatOutput: Send + Sync {
    /// Called for each chunk as it arrives from the model.
    fn on_chunk(&self, _chunk: &str) {}

    /// Called once the stream is exhausted.
    fn on_stream_end(&self) {}

    /// Called before a tool is dispatched.
    fn on_tool_call(&self, _call: &CallDescriptor) {}

    /// Called with a tool's formatted result.
    fn on_tool_result(&self, _name: &str, _result: &str) {}

    /// Called when a tool fails.
    fn on_tool_error(&self, _name: &str, _error: &ToolError) {}

    /// Explicit `/tool` invocation lacked required parameters.
    fn on_missing_parameters(&self, _name: &str, _missing: &[String]) {}

    /// Called with the tool list (`/tools`).
    fn on_tools(&self, _tools: &[&ToolDescriptor]) {}

    /// Called when a round fails but the session continues.
    fn on_error(&self, _message: &str) {}

    /// Informational line (help text, model changes, cleared history).
    fn info(&self, _message: &str) {}
}

/// No-op output for when nothing should be displayed
pub struct NoOutput;

impl ChatOutput for NoOutput {}
