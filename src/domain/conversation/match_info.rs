//! What is known about the match on the other side of the conversation.

use serde::{Deserialize, Serialize};

use super::stage::Stage;
use super::tone::ToneAnalysis;
use crate::domain::foundation::ValidationError;

/// Platform assumed when the caller does not name one.
pub const DEFAULT_PLATFORM: &str = "dating_app";

/// Gender recorded when unknown.
pub const UNKNOWN_GENDER: &str = "unknown";

/// Match details plus the state derived from the latest turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchInfo {
    /// Dating platform the conversation happens on (e.g. "Hinge").
    pub platform: String,
    pub user_gender: String,
    pub match_gender: String,
    /// Current stage, re-evaluated every turn.
    pub conversation_stage: Stage,
    /// Tone of the most recent user message, absent before the first turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_analysis: Option<ToneAnalysis>,
}

impl MatchInfo {
    /// Match info for the given platform with unknown genders.
    pub fn on_platform(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            ..Default::default()
        }
    }

    /// Checks the attached tone analysis, if any.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.platform.trim().is_empty() {
            return Err(ValidationError::empty_field("matchInfo.platform"));
        }
        if let Some(tone) = &self.tone_analysis {
            tone.validate()?;
        }
        Ok(())
    }
}

impl Default for MatchInfo {
    fn default() -> Self {
        Self {
            platform: DEFAULT_PLATFORM.to_string(),
            user_gender: UNKNOWN_GENDER.to_string(),
            match_gender: UNKNOWN_GENDER.to_string(),
            conversation_stage: Stage::Initial,
            tone_analysis: None,
        }
    }
}
