//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text generation (OpenAI, scripted mock)
//! - `sentiment` - Word-list sentiment lexicon
//! - `storage` - Conversation context stores (file, in-memory)
//! - `http` - Axum REST API

pub mod ai;
pub mod http;
pub mod sentiment;
pub mod storage;

pub use ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use sentiment::AfinnLexicon;
pub use storage::{FileContextStore, InMemoryContextStore};
