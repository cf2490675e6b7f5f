//! Presentation layer for ollama-toolcall
//!
//! This crate contains CLI definitions, console output,
//! progress reporters, and interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplError};
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::{console::ConsoleFormatter, init_color, sink::ConsoleOutput};
pub use progress::reporter::ProgressReporter;
