//! Conversation-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors that abort a turn before the context is touched.
///
/// Generation failures never surface here; the engine replaces them with
/// the configured fallback reply.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversationError {
    /// The user message is empty or otherwise unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A caller-supplied context violates the data-model invariants.
    #[error("Malformed context: {0}")]
    MalformedContext(#[from] ValidationError),
}

impl ConversationError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ConversationError::InvalidInput(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ConversationError::InvalidInput(_) => ErrorCode::InvalidInput,
            ConversationError::MalformedContext(_) => ErrorCode::MalformedContext,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            ConversationError::invalid_input("empty").code(),
            ErrorCode::InvalidInput
        );
        let malformed: ConversationError =
            ValidationError::inconsistent("metrics.messageCount", "2 != 3").into();
        assert_eq!(malformed.code(), ErrorCode::MalformedContext);
    }

    #[test]
    fn displays_underlying_reason() {
        let err: ConversationError = ValidationError::empty_field("matchInfo.platform").into();
        assert_eq!(
            err.to_string(),
            "Malformed context: Field 'matchInfo.platform' cannot be empty"
        );
    }
}
