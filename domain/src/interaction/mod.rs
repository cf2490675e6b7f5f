//! Interactive input classification.
//!
//! Each line typed into a session is one of:
//!
//! - blank (ignored)
//! - a session command (`/help`, `/clear`, `/model`, `/tools`, `exit`, ...)
//! - an explicit tool invocation (`/tool <Name> key="value" ...`)
//! - a freeform prompt for the model
//!
//! See [`classify_input`] and [`parse_tool_arguments`].

mod command;

pub use command::{CommandError, InputKind, SessionCommand, classify_input, parse_tool_arguments};
