//! GetConversation query handler.

use std::sync::Arc;

use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::UserId;
use crate::ports::ContextStore;

use super::error::ChatError;

/// Handler for reading a stored conversation.
pub struct GetConversationHandler {
    store: Arc<dyn ContextStore>,
}

impl GetConversationHandler {
    pub fn new(store: Arc<dyn ContextStore>) -> Self {
        Self { store }
    }

    /// Returns the stored context, or `None` if the user has none.
    pub async fn handle(&self, user_id: &UserId) -> Result<Option<ConversationContext>, ChatError> {
        Ok(self.store.load(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryContextStore;
    use crate::domain::conversation::{Goal, MatchInfo};

    #[tokio::test]
    async fn returns_stored_context() {
        let store = Arc::new(InMemoryContextStore::new());
        let user = UserId::new("user-1").unwrap();
        let context = ConversationContext::new(Goal::AskOut, MatchInfo::on_platform("Tinder"));
        store.save(&user, &context).await.unwrap();

        let handler = GetConversationHandler::new(store);

        assert_eq!(handler.handle(&user).await.unwrap(), Some(context));
    }

    #[tokio::test]
    async fn returns_none_for_unknown_user() {
        let handler = GetConversationHandler::new(Arc::new(InMemoryContextStore::new()));
        let user = UserId::new("nobody").unwrap();

        assert_eq!(handler.handle(&user).await.unwrap(), None);
    }
}
