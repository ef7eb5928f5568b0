//! Chat transcript
//!
//! Messages shown to the user while splitting. Errors from the interpreter
//! land here rather than changing the session phase.

use serde::Serialize;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person splitting the bill
    User,
    /// The assistant's replies
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Author
    pub role: Role,
    /// Message text
    pub text: String,
    /// When the message was added (RFC3339)
    pub at: String,
}

/// Ordered list of chat messages
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Append a message
    pub fn push(&mut self, role: Role, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            text: text.into(),
            at: chrono::Utc::now().to_rfc3339(),
        });
    }

    /// All messages, oldest first
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Most recent message
    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether there are no messages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
