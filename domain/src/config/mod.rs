//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod session_policy;

pub use session_policy::{ResponseMode, ToolResultPolicy};
