//! Errors shared by the chat handlers.

use thiserror::Error;

use crate::domain::conversation::ConversationError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::ContextStoreError;

/// Errors that can occur while handling a chat request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    /// Message text or user id is unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Supplied context violates the data-model invariants.
    #[error("Malformed context: {0}")]
    MalformedContext(String),

    /// The context store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ChatError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ChatError::InvalidInput(_) => ErrorCode::InvalidInput,
            ChatError::MalformedContext(_) => ErrorCode::MalformedContext,
            ChatError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ConversationError> for ChatError {
    fn from(err: ConversationError) -> Self {
        match err {
            ConversationError::InvalidInput(message) => ChatError::InvalidInput(message),
            ConversationError::MalformedContext(reason) => {
                ChatError::MalformedContext(reason.to_string())
            }
        }
    }
}

impl From<ValidationError> for ChatError {
    fn from(err: ValidationError) -> Self {
        ChatError::InvalidInput(err.to_string())
    }
}

impl From<ContextStoreError> for ChatError {
    fn from(err: ContextStoreError) -> Self {
        ChatError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_errors_keep_their_code() {
        let invalid: ChatError = ConversationError::invalid_input("empty").into();
        assert_eq!(invalid.code(), ErrorCode::InvalidInput);

        let malformed: ChatError =
            ConversationError::from(ValidationError::empty_field("matchInfo.platform")).into();
        assert_eq!(malformed.code(), ErrorCode::MalformedContext);
        assert!(malformed.to_string().contains("matchInfo.platform"));
    }

    #[test]
    fn store_errors_map_to_storage() {
        let err: ChatError = ContextStoreError::Io("disk full".to_string()).into();
        assert_eq!(err, ChatError::Storage("IO error: disk full".to_string()));
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}
