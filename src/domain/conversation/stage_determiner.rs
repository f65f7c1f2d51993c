//! Maps conversation state to a [`Stage`].
//!
//! The stage is re-evaluated from scratch every turn from the message count
//! and the latest rapport score. It is not a transition table, so the stage
//! can move backward if rapport drops after advancing.

use super::config::ConversationConfig;
use super::context::ConversationContext;
use super::stage::Stage;
use super::tone::ToneAnalysis;

/// Message count up to which a conversation stays in the initial stage.
pub const INITIAL_STAGE_MAX_MESSAGES: usize = 2;

/// Message count up to which a conversation stays in the rapport stage.
pub const RAPPORT_STAGE_MAX_MESSAGES: usize = 5;

/// Rapport score required to leave the rapport stage.
pub const RAPPORT_STAGE_MIN_SCORE: f64 = 0.6;

/// Determines the stage for a conversation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageDeterminer {
    max_messages_before_goal_attempt: usize,
    min_rapport_score_for_goal: f64,
}

impl StageDeterminer {
    /// Creates a determiner using the goal thresholds from `config`.
    pub fn new(config: &ConversationConfig) -> Self {
        Self {
            max_messages_before_goal_attempt: config.max_messages_before_goal_attempt,
            min_rapport_score_for_goal: config.min_rapport_score_for_goal,
        }
    }

    /// Stage for the context's message count and tone.
    pub fn determine(&self, context: &ConversationContext) -> Stage {
        self.determine_from(context.metrics.message_count, context.tone())
    }

    /// Stage for a message count and optional tone. Missing tone scores zero.
    pub fn determine_from(&self, message_count: usize, tone: Option<&ToneAnalysis>) -> Stage {
        let score = tone.map(ToneAnalysis::rapport_score).unwrap_or(0.0);

        if message_count <= INITIAL_STAGE_MAX_MESSAGES {
            Stage::Initial
        } else if message_count <= RAPPORT_STAGE_MAX_MESSAGES || score < RAPPORT_STAGE_MIN_SCORE {
            Stage::BuildingRapport
        } else if message_count <= self.max_messages_before_goal_attempt
            || score < self.min_rapport_score_for_goal
        {
            Stage::Advancing
        } else {
            Stage::Closing
        }
    }
}

impl Default for StageDeterminer {
    fn default() -> Self {
        Self::new(&ConversationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Sentiment;

    fn tone(engagement: f64, interest: f64) -> ToneAnalysis {
        ToneAnalysis::new(interest, engagement, Sentiment::Neutral)
    }

    #[test]
    fn strong_rapport_ladder_switches_at_3_6_and_11() {
        let determiner = StageDeterminer::default();
        let tone = tone(0.8, 0.8);

        let stages: Vec<Stage> = (1..=12)
            .map(|count| determiner.determine_from(count, Some(&tone)))
            .collect();

        assert_eq!(
            stages,
            vec![
                Stage::Initial,
                Stage::Initial,
                Stage::BuildingRapport,
                Stage::BuildingRapport,
                Stage::BuildingRapport,
                Stage::Advancing,
                Stage::Advancing,
                Stage::Advancing,
                Stage::Advancing,
                Stage::Advancing,
                Stage::Closing,
                Stage::Closing,
            ]
        );
    }

    #[test]
    fn stage_never_decreases_with_constant_tone() {
        let determiner = StageDeterminer::default();
        for (e, i) in [(0.0, 0.0), (0.5, 0.6), (0.65, 0.7), (1.0, 1.0)] {
            let tone = tone(e, i);
            let mut previous = Stage::Initial;
            for count in 0..40 {
                let stage = determiner.determine_from(count, Some(&tone));
                assert!(stage >= previous, "regressed at count {}", count);
                previous = stage;
            }
        }
    }

    #[test]
    fn missing_tone_stays_in_rapport_building() {
        let determiner = StageDeterminer::default();
        assert_eq!(determiner.determine_from(0, None), Stage::Initial);
        assert_eq!(determiner.determine_from(50, None), Stage::BuildingRapport);
    }

    #[test]
    fn weak_rapport_holds_rapport_stage() {
        let determiner = StageDeterminer::default();
        assert_eq!(
            determiner.determine_from(8, Some(&tone(0.6, 0.59))),
            Stage::BuildingRapport
        );
    }

    #[test]
    fn moderate_rapport_cannot_close() {
        let determiner = StageDeterminer::default();
        // score 0.65: past rapport gate, short of goal gate
        assert_eq!(
            determiner.determine_from(30, Some(&tone(0.6, 0.7))),
            Stage::Advancing
        );
    }

    #[test]
    fn stage_regresses_when_rapport_drops() {
        let determiner = StageDeterminer::default();
        assert_eq!(determiner.determine_from(12, Some(&tone(0.9, 0.9))), Stage::Closing);
        assert_eq!(
            determiner.determine_from(13, Some(&tone(0.2, 0.2))),
            Stage::BuildingRapport
        );
    }

    #[test]
    fn thresholds_come_from_config() {
        let config = ConversationConfig {
            max_messages_before_goal_attempt: 6,
            min_rapport_score_for_goal: 0.9,
            ..Default::default()
        };
        let determiner = StageDeterminer::new(&config);

        assert_eq!(determiner.determine_from(7, Some(&tone(0.85, 0.85))), Stage::Advancing);
        assert_eq!(determiner.determine_from(7, Some(&tone(0.95, 0.95))), Stage::Closing);
    }

    #[test]
    fn determine_reads_count_from_metrics() {
        let mut context = ConversationContext::default();
        context.metrics.message_count = 6;
        context.match_info.tone_analysis = Some(tone(0.8, 0.8));

        assert_eq!(StageDeterminer::default().determine(&context), Stage::Advancing);
    }
}
