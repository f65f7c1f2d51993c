//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `conversation` - Tone analysis, stages, metrics, prompts, and the turn engine

pub mod conversation;
pub mod foundation;
