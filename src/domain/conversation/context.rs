//! Conversation context, the aggregate passed into and returned from each turn.

use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::match_info::MatchInfo;
use super::message::Message;
use super::metrics::Metrics;
use super::stage::Stage;
use super::tone::ToneAnalysis;
use crate::domain::foundation::ValidationError;

/// Full state of one conversation.
///
/// # Invariants
///
/// - `messages.len() == metrics.message_count` after every completed turn
/// - `match_info.tone_analysis`, when present, scores the latest user message
/// - `goal` is fixed for the conversation's lifetime
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversationContext {
    pub goal: Goal,
    pub messages: Vec<Message>,
    pub match_info: MatchInfo,
    pub metrics: Metrics,
}

impl ConversationContext {
    /// Creates an empty conversation in the initial stage.
    pub fn new(goal: Goal, match_info: MatchInfo) -> Self {
        Self {
            goal,
            messages: Vec::new(),
            match_info: MatchInfo {
                conversation_stage: Stage::Initial,
                tone_analysis: None,
                ..match_info
            },
            metrics: Metrics::default(),
        }
    }

    /// Current stage of the conversation.
    pub fn stage(&self) -> Stage {
        self.match_info.conversation_stage
    }

    /// Tone of the latest user message, if any has been processed.
    pub fn tone(&self) -> Option<&ToneAnalysis> {
        self.match_info.tone_analysis.as_ref()
    }

    /// Number of messages in the log.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Checks that a caller-supplied context satisfies the data-model invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.messages.len() != self.metrics.message_count {
            return Err(ValidationError::inconsistent(
                "metrics.messageCount",
                format!(
                    "{} messages in log but messageCount is {}",
                    self.messages.len(),
                    self.metrics.message_count
                ),
            ));
        }
        self.match_info.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Sentiment;
    use crate::domain::foundation::Timestamp;

    fn at(millis: i64) -> Timestamp {
        Timestamp::from_unix_millis(millis).unwrap()
    }

    fn two_message_context() -> ConversationContext {
        let mut context = ConversationContext::new(Goal::SetDate, MatchInfo::on_platform("Hinge"));
        context.messages.push(Message::user("Hey! I love hiking", at(1_700_000_000_123)));
        context
            .messages
            .push(Message::assistant("Same here, where do you go?", at(1_700_000_004_456)));
        context.match_info.conversation_stage = Stage::BuildingRapport;
        context.match_info.tone_analysis =
            Some(ToneAnalysis::new(0.83, 0.41, Sentiment::Positive));
        context.metrics = Metrics {
            message_count: 2,
            average_response_time: 4.333,
            goal_progress: 0.56,
        };
        context
    }

    mod construction {
        use super::*;

        #[test]
        fn new_context_is_empty_and_initial() {
            let context = ConversationContext::new(Goal::AskOut, MatchInfo::on_platform("Tinder"));
            assert_eq!(context.goal, Goal::AskOut);
            assert_eq!(context.stage(), Stage::Initial);
            assert_eq!(context.message_count(), 0);
            assert!(context.tone().is_none());
            assert_eq!(context.metrics, Metrics::default());
        }

        #[test]
        fn new_context_resets_derived_match_state() {
            let info = MatchInfo {
                conversation_stage: Stage::Closing,
                tone_analysis: Some(ToneAnalysis::new(1.0, 1.0, Sentiment::Positive)),
                ..MatchInfo::on_platform("Hinge")
            };
            let context = ConversationContext::new(Goal::SetDate, info);
            assert_eq!(context.stage(), Stage::Initial);
            assert!(context.tone().is_none());
            assert_eq!(context.match_info.platform, "Hinge");
        }

        #[test]
        fn default_context_builds_rapport_on_generic_platform() {
            let context = ConversationContext::default();
            assert_eq!(context.goal, Goal::BuildRapport);
            assert_eq!(context.match_info.platform, "dating_app");
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn consistent_context_is_valid() {
            assert!(two_message_context().validate().is_ok());
        }

        #[test]
        fn rejects_message_count_mismatch() {
            let mut context = two_message_context();
            context.metrics.message_count = 3;
            assert!(matches!(
                context.validate(),
                Err(ValidationError::Inconsistent { .. })
            ));
        }

        #[test]
        fn rejects_out_of_range_tone() {
            let mut context = two_message_context();
            context.match_info.tone_analysis = Some(ToneAnalysis {
                interest: 2.0,
                engagement: 0.5,
                sentiment: Sentiment::Neutral,
            });
            assert!(context.validate().is_err());
        }

        #[test]
        fn rejects_out_of_range_goal_progress() {
            let mut context = two_message_context();
            context.metrics.goal_progress = -0.5;
            assert!(context.validate().is_err());
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn round_trip_reproduces_identical_context() {
            let context = two_message_context();
            let json = serde_json::to_string(&context).unwrap();
            let restored: ConversationContext = serde_json::from_str(&json).unwrap();

            assert_eq!(restored, context);
            assert_eq!(restored.messages[1].timestamp(), context.messages[1].timestamp());
            assert_eq!(
                restored.metrics.average_response_time.to_bits(),
                context.metrics.average_response_time.to_bits()
            );
        }

        #[test]
        fn uses_external_field_names() {
            let json = serde_json::to_value(two_message_context()).unwrap();
            assert_eq!(json["goal"], "SET_DATE");
            assert_eq!(json["matchInfo"]["conversationStage"], "building_rapport");
            assert_eq!(json["matchInfo"]["toneAnalysis"]["sentiment"], "positive");
            assert_eq!(json["metrics"]["messageCount"], 2);
            assert_eq!(json["messages"][0]["role"], "user");
        }

        #[test]
        fn missing_sections_default() {
            let context: ConversationContext =
                serde_json::from_str(r#"{"goal":"GET_PHONE_NUMBER"}"#).unwrap();
            assert_eq!(context.goal, Goal::GetPhoneNumber);
            assert!(context.messages.is_empty());
            assert_eq!(context.metrics.message_count, 0);
            assert!(context.validate().is_ok());
        }
    }
}
