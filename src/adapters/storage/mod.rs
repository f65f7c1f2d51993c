//! Storage Adapters
//!
//! Implementations of the ContextStore port for persisting conversation contexts.
//!
//! ## Available Adapters
//!
//! - **FileContextStore** - One JSON file per user on disk
//! - **InMemoryContextStore** - Process-local map (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileContextStore, InMemoryContextStore};
//!
//! // Production: file-based storage
//! let store = FileContextStore::new("./data/contexts");
//!
//! // Testing: in-memory storage
//! let store = InMemoryContextStore::new();
//! ```

mod file_context_store;
mod in_memory_context_store;

pub use file_context_store::FileContextStore;
pub use in_memory_context_store::InMemoryContextStore;
