//! System prompt composition for the text generator.

mod composer;
pub mod templates;

pub use composer::{EngagementTier, PromptComposer, PromptSelection};
