//! SendChatMessage command handler.
//!
//! Runs one conversation turn for a user and persists the updated context.
//! A context supplied with the command takes precedence over the stored one.

use std::sync::Arc;

use crate::domain::conversation::{ConversationContext, ConversationEngine, TurnOutcome};
use crate::domain::foundation::UserId;
use crate::ports::ContextStore;

use super::error::ChatError;

/// Command to send a chat message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    /// The user the conversation belongs to.
    pub user_id: UserId,
    /// The message text.
    pub message: String,
    /// Caller-supplied context, replacing whatever is stored.
    pub context: Option<ConversationContext>,
}

impl SendChatMessageCommand {
    /// Creates a command that continues the stored conversation, if any.
    pub fn new(user_id: UserId, message: impl Into<String>) -> Self {
        Self {
            user_id,
            message: message.into(),
            context: None,
        }
    }

    /// Supplies the context to continue from.
    pub fn with_context(mut self, context: ConversationContext) -> Self {
        self.context = Some(context);
        self
    }
}

/// Handler for chat messages.
pub struct SendChatMessageHandler {
    engine: Arc<ConversationEngine>,
    store: Arc<dyn ContextStore>,
}

impl SendChatMessageHandler {
    pub fn new(engine: Arc<ConversationEngine>, store: Arc<dyn ContextStore>) -> Self {
        Self { engine, store }
    }

    /// Runs the turn.
    ///
    /// Loading the stored context is required to succeed; saving the result
    /// is not. A failed save is logged and the completed turn is still returned.
    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<TurnOutcome, ChatError> {
        let existing = match cmd.context {
            Some(context) => Some(context),
            None => self.store.load(&cmd.user_id).await?,
        };

        let outcome = self.engine.turn(&cmd.message, existing.as_ref()).await?;

        if let Err(err) = self.store.save(&cmd.user_id, &outcome.context).await {
            tracing::error!(
                user_id = %cmd.user_id,
                error = %err,
                "Failed to save conversation context"
            );
        }

        Ok(outcome)
    }
}
