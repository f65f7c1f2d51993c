//! Wingman - Dating-app conversation engine
//!
//! Scores each incoming message for interest, engagement and sentiment,
//! tracks the conversation through its stages toward a configured goal,
//! and composes the system prompt for the text generator that writes
//! the reply.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
