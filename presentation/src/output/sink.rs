//! [`ChatOutput`] implementation that writes to the terminal
//!
//! Model text and tool results go to stdout; errors go to stderr.

use crate::output::console::ConsoleFormatter;
use std::io::Write;
use toolcall_application::ChatOutput;
use toolcall_domain::{CallDescriptor, ToolDescriptor, ToolError};

/// Writes session events to the console
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl ChatOutput for ConsoleOutput {
    fn on_chunk(&self, chunk: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(chunk.as_bytes());
        let _ = stdout.flush();
    }

    fn on_stream_end(&self) {
        println!();
    }

    fn on_tool_call(&self, call: &CallDescriptor) {
        println!("{}", ConsoleFormatter::format_tool_call(call));
    }

    fn on_tool_result(&self, name: &str, result: &str) {
        println!("{}", ConsoleFormatter::format_tool_result(name, result));
    }

    fn on_tool_error(&self, name: &str, error: &ToolError) {
        eprintln!("{}", ConsoleFormatter::format_tool_error(name, error));
    }

    fn on_missing_parameters(&self, name: &str, missing: &[String]) {
        eprintln!(
            "{}",
            ConsoleFormatter::format_missing_parameters(name, missing)
        );
    }

    fn on_tools(&self, tools: &[&ToolDescriptor]) {
        print!("{}", ConsoleFormatter::format_tool_list(tools));
    }

    fn on_error(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::format_error(message));
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }
}
