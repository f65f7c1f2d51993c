//! Chat command and query handlers.
//!
//! Handles sending messages, reading stored conversations, and clearing them.

mod clear_conversation;
mod error;
mod get_conversation;
mod send_chat_message;

pub use clear_conversation::ClearConversationHandler;
pub use error::ChatError;
pub use get_conversation::GetConversationHandler;
pub use send_chat_message::{SendChatMessageCommand, SendChatMessageHandler};
