//! Conversation session domain.
//!
//! - [`entities::Message`]: a single role-tagged turn
//! - [`conversation::Conversation`]: ordered history owned by one session

pub mod conversation;
pub mod entities;
