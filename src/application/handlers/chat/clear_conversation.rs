//! ClearConversation command handler.
//!
//! Forgets a user's conversation so the next message starts fresh.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::ports::ContextStore;

use super::error::ChatError;

/// Handler for clearing stored conversations.
pub struct ClearConversationHandler {
    store: Arc<dyn ContextStore>,
}

impl ClearConversationHandler {
    pub fn new(store: Arc<dyn ContextStore>) -> Self {
        Self { store }
    }

    /// Deletes the stored context. Returns `true` if one existed.
    pub async fn handle(&self, user_id: &UserId) -> Result<bool, ChatError> {
        let cleared = self.store.delete(user_id).await?;
        tracing::info!(user_id = %user_id, cleared, "Conversation cleared");
        Ok(cleared)
    }
}
