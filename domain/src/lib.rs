//! Domain layer for ollama-toolcall
//!
//! This crate contains the core tool-calling logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A tool is a named capability with a declared parameter schema
//! ([`ToolDescriptor`]). The descriptor set is serialized into the model's
//! system instructions as a [`ToolManifest`].
//!
//! ## Call extraction
//!
//! A model asks for a tool by emitting a [`CallDescriptor`]. Two protocols
//! recover it from model output:
//!
//! - **Strict**: the whole response is one JSON call descriptor
//! - **Embedded**: free text with an optional call bounded by
//!   [`CALL_START_MARKER`] / [`CALL_END_MARKER`]
//!
//! ## Sessions
//!
//! A [`Conversation`] holds the ordered [`Message`] history of one interactive
//! session. User input is classified by [`classify_input`] into commands,
//! explicit tool invocations, and freeform prompts.

pub mod api;
pub mod config;
pub mod core;
pub mod interaction;
pub mod prompt;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use api::{Coordinates, SearchHit};
pub use config::{ResponseMode, ToolResultPolicy};
pub use core::model::Model;
pub use interaction::{
    CommandError, InputKind, SessionCommand, classify_input, parse_tool_arguments,
};
pub use prompt::PromptTemplate;
pub use session::{
    conversation::Conversation,
    entities::{Message, Role},
};
pub use tool::{
    entities::{CallDescriptor, CallParameter, ParameterSpec, ToolDescriptor, ToolManifest},
    extractor::{
        CALL_END_MARKER, CALL_START_MARKER, EmbeddedStrategy, ExtractError, extract_balanced,
        extract_delimited, extract_embedded, parse_strict,
    },
    resolver::resolve_parameter,
    traits::{RequiredParameterValidator, ToolValidator},
    value_objects::{ToolError, ToolErrorCode},
};
