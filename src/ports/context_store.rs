//! Context Store Port - Interface for persisting conversation contexts.
//!
//! Contexts are opaque blobs keyed by user id. The engine itself never
//! touches a store; the application layer loads before a turn and saves after.

use async_trait::async_trait;

use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::UserId;

/// Errors that can occur during context storage operations
#[derive(Debug, thiserror::Error)]
pub enum ContextStoreError {
    #[error("Failed to serialize context: {0}")]
    Serialization(String),

    #[error("Failed to deserialize context: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for saving, loading and clearing conversation contexts
#[async_trait]
pub trait ContextStore: Send + Sync {
    /// Load the stored context for a user
    ///
    /// # Returns
    /// `None` if nothing is stored for `user_id`
    async fn load(&self, user_id: &UserId) -> Result<Option<ConversationContext>, ContextStoreError>;

    /// Save a context, replacing any previous one for `user_id`
    async fn save(
        &self,
        user_id: &UserId,
        context: &ConversationContext,
    ) -> Result<(), ContextStoreError>;

    /// Delete the stored context for a user
    ///
    /// # Returns
    /// `true` if a context existed and was removed
    async fn delete(&self, user_id: &UserId) -> Result<bool, ContextStoreError>;
}
