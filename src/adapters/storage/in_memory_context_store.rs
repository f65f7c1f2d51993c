//! In-Memory Context Store Adapter
//!
//! Keeps conversation contexts in a process-local map.
//! Used when no data directory is configured, and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::UserId;
use crate::ports::{ContextStore, ContextStoreError};

/// In-memory storage for conversation contexts
#[derive(Debug, Clone, Default)]
pub struct InMemoryContextStore {
    contexts: Arc<RwLock<HashMap<UserId, ConversationContext>>>,
}

impl InMemoryContextStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored contexts (useful for tests)
    pub async fn clear(&self) {
        self.contexts.write().await.clear();
    }

    /// Get the number of stored contexts
    pub async fn len(&self) -> usize {
        self.contexts.read().await.len()
    }

    /// Check whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.contexts.read().await.is_empty()
    }
}

#[async_trait]
impl ContextStore for InMemoryContextStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<ConversationContext>, ContextStoreError> {
        Ok(self.contexts.read().await.get(user_id).cloned())
    }

    async fn save(
        &self,
        user_id: &UserId,
        context: &ConversationContext,
    ) -> Result<(), ContextStoreError> {
        self.contexts
            .write()
            .await
            .insert(user_id.clone(), context.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<bool, ContextStoreError> {
        Ok(self.contexts.write().await.remove(user_id).is_some())
    }
}
