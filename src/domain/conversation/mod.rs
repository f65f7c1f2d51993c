//! Conversation domain module.
//!
//! Tracks the state of a dating-app conversation and decides how the
//! assistant should reply: tone analysis of each user message, stage
//! determination, progress metrics, and system-prompt composition,
//! tied together by the turn-level [`ConversationEngine`].

mod config;
mod context;
mod engine;
mod errors;
mod goal;
mod match_info;
mod message;
mod metrics;
pub mod prompt;
mod stage;
mod stage_determiner;
mod tone;

pub use config::{
    ConversationConfig, TemperatureByStage, DEFAULT_FALLBACK_RESPONSE, MAX_TEMPERATURE,
    MIN_MESSAGES_BEFORE_GOAL_ATTEMPT,
};
pub use context::ConversationContext;
pub use engine::{ConversationEngine, TurnAnalysis, TurnOutcome};
pub use errors::ConversationError;
pub use goal::Goal;
pub use match_info::{MatchInfo, DEFAULT_PLATFORM, UNKNOWN_GENDER};
pub use message::{Message, MessageRole};
pub use metrics::{Metrics, MetricsTracker};
pub use prompt::{EngagementTier, PromptComposer, PromptSelection};
pub use stage::Stage;
pub use stage_determiner::{
    StageDeterminer, INITIAL_STAGE_MAX_MESSAGES, RAPPORT_STAGE_MAX_MESSAGES,
    RAPPORT_STAGE_MIN_SCORE,
};
pub use tone::{
    tokenize, Sentiment, ToneAnalysis, ToneAnalyzer, ENTHUSIASTIC_MARKERS, FOLLOW_UP_INDICATORS,
    NEGATIVE_THRESHOLD, PERSONAL_PRONOUNS, POSITIVE_THRESHOLD,
};
