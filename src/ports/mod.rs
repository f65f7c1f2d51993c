//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text generation for assistant replies
//! - `SentimentLexicon` - Comparative sentiment score for a message
//! - `ContextStore` - Conversation contexts keyed by user id

mod ai_provider;
mod context_store;
mod sentiment_lexicon;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use context_store::{ContextStore, ContextStoreError};
pub use sentiment_lexicon::SentimentLexicon;
