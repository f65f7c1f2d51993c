//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (send, clear) and queries (get) have separate handlers.

pub mod handlers;

pub use handlers::{
    ChatError, ClearConversationHandler, GetConversationHandler, SendChatMessageCommand,
    SendChatMessageHandler,
};
