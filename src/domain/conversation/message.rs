//! Message entity for conversations.
//!
//! Messages are immutable records of user/assistant exchanges within a conversation.
//! They are appended to the conversation log in arrival order.

use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// The person using the assistant (relaying what the match wrote).
    User,
    /// Text produced by the assistant.
    Assistant,
}

/// An immutable message within a conversation.
///
/// # Invariants
///
/// - fields are fixed at construction; there are no setters
/// - `timestamp` records when the message entered the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    role: MessageRole,

    /// The content of the message.
    content: String,

    /// When the message was appended.
    timestamp: Timestamp,
}

impl Message {
    /// Creates a message with the given role, content, and timestamp.
    pub fn new(role: MessageRole, content: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>, timestamp: Timestamp) -> Self {
        Self::new(MessageRole::User, content, timestamp)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>, timestamp: Timestamp) -> Self {
        Self::new(MessageRole::Assistant, content, timestamp)
    }

    /// Returns the role of the sender.
    pub fn role(&self) -> MessageRole {
        self.role
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the message was appended.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns true if the message came from the user.
    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}
