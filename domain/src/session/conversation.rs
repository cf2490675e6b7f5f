//! Ordered conversation history for one interactive session.

use super::entities::{Message, Role};

/// Conversation history (Entity)
///
/// Optionally anchored by a system turn that survives [`Conversation::clear`].
/// Never persisted; dropped with the session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    system: Option<Message>,
    turns: Vec<Message>,
}

impl Conversation {
    /// Empty history with no system turn.
    pub fn new() -> Self {
        Self::default()
    }

    /// History seeded with a system turn that is kept across clears.
    pub fn with_system(content: impl Into<String>) -> Self {
        Self {
            system: Some(Message::system(content)),
            turns: Vec::new(),
        }
    }

    pub fn system(&self) -> Option<&Message> {
        self.system.as_ref()
    }

    /// All messages in order, system turn first.
    pub fn messages(&self) -> Vec<Message> {
        self.system
            .iter()
            .chain(self.turns.iter())
            .cloned()
            .collect()
    }

    /// Number of messages including the system turn.
    pub fn len(&self) -> usize {
        self.turns.len() + usize::from(self.system.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when nothing but the (optional) system turn is present.
    pub fn has_no_exchanges(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.turns.push(message);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Message::assistant(content));
    }

    /// Reset to just the system turn (or to empty if there is none).
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn last(&self) -> Option<&Message> {
        self.turns.last().or(self.system.as_ref())
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.messages().iter().filter(|m| m.role == role).count()
    }
}
