//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface around a
//! [`ChatSession`](toolcall_application::ChatSession).

mod repl;

pub use repl::{ChatRepl, ReplError};
