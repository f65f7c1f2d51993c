//! Tunable thresholds for a conversation.
//!
//! Passed explicitly into [`ConversationEngine`](super::ConversationEngine)
//! so that tests and deployments can override any value.

use serde::{Deserialize, Serialize};

use super::stage::Stage;
use crate::domain::foundation::{is_unit, ValidationError};

/// Smallest allowed `max_messages_before_goal_attempt`.
///
/// The stage ladder already uses counts up to 5 for the earlier stages.
pub const MIN_MESSAGES_BEFORE_GOAL_ATTEMPT: usize = 5;

/// Upper bound accepted for generation temperatures.
pub const MAX_TEMPERATURE: f64 = 2.0;

/// Default reply used when text generation fails.
pub const DEFAULT_FALLBACK_RESPONSE: &str =
    "I apologize, but I could not generate a response at this time.";

/// Configuration for stage gating, prompt tiers, and generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Message count after which the closing stage becomes reachable.
    #[serde(default = "default_max_messages_before_goal_attempt")]
    pub max_messages_before_goal_attempt: usize,

    /// Rapport score required to enter the closing stage.
    #[serde(default = "default_min_rapport_score_for_goal")]
    pub min_rapport_score_for_goal: f64,

    /// Generation temperature per stage.
    #[serde(default)]
    pub temperature_by_stage: TemperatureByStage,

    /// Engagement at or above which the high tone tier applies.
    #[serde(default = "default_high_engagement_threshold")]
    pub high_engagement_threshold: f64,

    /// Engagement at or above which the medium tone tier applies.
    #[serde(default = "default_medium_engagement_threshold")]
    pub medium_engagement_threshold: f64,

    /// Assistant reply recorded when generation fails.
    #[serde(default = "default_fallback_response")]
    pub fallback_response: String,
}

impl ConversationConfig {
    /// Checks thresholds and temperatures for consistency.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_messages_before_goal_attempt < MIN_MESSAGES_BEFORE_GOAL_ATTEMPT {
            return Err(ValidationError::out_of_range(
                "conversation.max_messages_before_goal_attempt",
                MIN_MESSAGES_BEFORE_GOAL_ATTEMPT as f64,
                f64::from(u32::MAX),
                self.max_messages_before_goal_attempt as f64,
            ));
        }

        for (field, value) in [
            (
                "conversation.min_rapport_score_for_goal",
                self.min_rapport_score_for_goal,
            ),
            (
                "conversation.high_engagement_threshold",
                self.high_engagement_threshold,
            ),
            (
                "conversation.medium_engagement_threshold",
                self.medium_engagement_threshold,
            ),
        ] {
            if !is_unit(value) {
                return Err(ValidationError::out_of_range(field, 0.0, 1.0, value));
            }
        }

        if self.medium_engagement_threshold > self.high_engagement_threshold {
            return Err(ValidationError::inconsistent(
                "conversation.medium_engagement_threshold",
                format!(
                    "{} exceeds high_engagement_threshold {}",
                    self.medium_engagement_threshold, self.high_engagement_threshold
                ),
            ));
        }

        self.temperature_by_stage.validate()?;

        if self.fallback_response.trim().is_empty() {
            return Err(ValidationError::empty_field("conversation.fallback_response"));
        }

        Ok(())
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_messages_before_goal_attempt: default_max_messages_before_goal_attempt(),
            min_rapport_score_for_goal: default_min_rapport_score_for_goal(),
            temperature_by_stage: TemperatureByStage::default(),
            high_engagement_threshold: default_high_engagement_threshold(),
            medium_engagement_threshold: default_medium_engagement_threshold(),
            fallback_response: default_fallback_response(),
        }
    }
}

/// Generation temperature for each stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureByStage {
    #[serde(default = "default_initial_temperature")]
    pub initial: f64,
    #[serde(default = "default_building_rapport_temperature")]
    pub building_rapport: f64,
    #[serde(default = "default_advancing_temperature")]
    pub advancing: f64,
    #[serde(default = "default_closing_temperature")]
    pub closing: f64,
}

impl TemperatureByStage {
    /// Temperature to use while in `stage`.
    pub fn for_stage(&self, stage: Stage) -> f64 {
        match stage {
            Stage::Initial => self.initial,
            Stage::BuildingRapport => self.building_rapport,
            Stage::Advancing => self.advancing,
            Stage::Closing => self.closing,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for stage in Stage::ALL {
            let value = self.for_stage(stage);
            if !value.is_finite() || !(0.0..=MAX_TEMPERATURE).contains(&value) {
                return Err(ValidationError::out_of_range(
                    format!("conversation.temperature_by_stage.{}", stage),
                    0.0,
                    MAX_TEMPERATURE,
                    value,
                ));
            }
        }
        Ok(())
    }
}

impl Default for TemperatureByStage {
    fn default() -> Self {
        Self {
            initial: default_initial_temperature(),
            building_rapport: default_building_rapport_temperature(),
            advancing: default_advancing_temperature(),
            closing: default_closing_temperature(),
        }
    }
}

fn default_max_messages_before_goal_attempt() -> usize {
    10
}

fn default_min_rapport_score_for_goal() -> f64 {
    0.7
}

fn default_high_engagement_threshold() -> f64 {
    0.7
}

fn default_medium_engagement_threshold() -> f64 {
    0.4
}

fn default_fallback_response() -> String {
    DEFAULT_FALLBACK_RESPONSE.to_string()
}

fn default_initial_temperature() -> f64 {
    0.7
}

fn default_building_rapport_temperature() -> f64 {
    0.8
}

fn default_advancing_temperature() -> f64 {
    0.6
}

fn default_closing_temperature() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ConversationConfig::default();
        assert_eq!(config.max_messages_before_goal_attempt, 10);
        assert_eq!(config.min_rapport_score_for_goal, 0.7);
        assert_eq!(config.high_engagement_threshold, 0.7);
        assert_eq!(config.medium_engagement_threshold, 0.4);
        assert_eq!(config.fallback_response, DEFAULT_FALLBACK_RESPONSE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn temperature_table_covers_every_stage() {
        let temps = TemperatureByStage::default();
        assert_eq!(temps.for_stage(Stage::Initial), 0.7);
        assert_eq!(temps.for_stage(Stage::BuildingRapport), 0.8);
        assert_eq!(temps.for_stage(Stage::Advancing), 0.6);
        assert_eq!(temps.for_stage(Stage::Closing), 0.5);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: ConversationConfig = serde_json::from_str(
            r#"{"min_rapport_score_for_goal":0.8,"temperature_by_stage":{"closing":0.3}}"#,
        )
        .unwrap();

        assert_eq!(config.min_rapport_score_for_goal, 0.8);
        assert_eq!(config.max_messages_before_goal_attempt, 10);
        assert_eq!(config.temperature_by_stage.closing, 0.3);
        assert_eq!(config.temperature_by_stage.initial, 0.7);
    }

    #[test]
    fn rejects_short_goal_window() {
        let config = ConversationConfig {
            max_messages_before_goal_attempt: 4,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_threshold_outside_unit_interval() {
        let config = ConversationConfig {
            min_rapport_score_for_goal: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_medium_tier_above_high_tier() {
        let config = ConversationConfig {
            high_engagement_threshold: 0.5,
            medium_engagement_threshold: 0.6,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::Inconsistent { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = ConversationConfig {
            temperature_by_stage: TemperatureByStage {
                advancing: 2.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_fallback() {
        let config = ConversationConfig {
            fallback_response: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyField { .. })
        ));
    }
}
