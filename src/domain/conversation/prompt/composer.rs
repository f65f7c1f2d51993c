//! System prompt composition.

use std::fmt::Write as _;

use super::templates;
use crate::domain::conversation::{ConversationConfig, ConversationContext, Goal, Stage};

/// Engagement band used to pick the tone instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngagementTier {
    High,
    Medium,
    Low,
}

/// Which blocks a prompt is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSelection {
    pub stage: Stage,
    pub goal: Goal,
    /// Whether the goal block ends with the ready-for-goal line.
    pub ready_for_goal: bool,
    /// Tone tier block, present only when the context carries a tone analysis.
    pub tone_tier: Option<EngagementTier>,
}

/// Renders the system prompt handed to the text generator.
///
/// Output depends only on the context and the thresholds captured at
/// construction. Blocks always appear in the order stage, goal, tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptComposer {
    max_messages_before_goal_attempt: usize,
    high_engagement_threshold: f64,
    medium_engagement_threshold: f64,
}

impl PromptComposer {
    pub fn new(config: &ConversationConfig) -> Self {
        Self {
            max_messages_before_goal_attempt: config.max_messages_before_goal_attempt,
            high_engagement_threshold: config.high_engagement_threshold,
            medium_engagement_threshold: config.medium_engagement_threshold,
        }
    }

    /// Engagement tier for a score.
    pub fn tier_for(&self, engagement: f64) -> EngagementTier {
        if engagement >= self.high_engagement_threshold {
            EngagementTier::High
        } else if engagement >= self.medium_engagement_threshold {
            EngagementTier::Medium
        } else {
            EngagementTier::Low
        }
    }

    /// Picks the stage, goal, and tone blocks for `context`.
    pub fn select_blocks(&self, context: &ConversationContext) -> PromptSelection {
        PromptSelection {
            stage: context.stage(),
            goal: context.goal,
            ready_for_goal: context.metrics.message_count >= self.max_messages_before_goal_attempt,
            tone_tier: context.tone().map(|tone| self.tier_for(tone.engagement)),
        }
    }

    /// Renders the full system prompt for `context`.
    pub fn compose(&self, context: &ConversationContext) -> String {
        let selection = self.select_blocks(context);
        let info = &context.match_info;
        let mut prompt = String::with_capacity(2048);

        // write! into a String cannot fail
        let _ = write!(
            prompt,
            "You are a charismatic and witty dating coach AI helping to maintain engaging \
             conversations on {platform}.\n\
             Your goal is to help craft messages that will lead to {goal}, while keeping the \
             conversation fun, natural, and engaging.\n\
             You have a great sense of humor and know how to use it appropriately - from clever \
             wordplay to playful teasing.\n\n\
             {traits}\n\n\
             User Gender: {user_gender}\n\
             Match Gender: {match_gender}\n\
             Current Stage: {stage}\n\
             Message Count: {count}\n\n\
             Stage Guidelines:\n\
             {stage_block}\n\n\
             Goal: {goal}\n\
             {goal_block}\n\
             {readiness}\n\n\
             {reminders}",
            platform = info.platform,
            goal = selection.goal,
            traits = templates::PERSONALITY_TRAITS,
            user_gender = info.user_gender,
            match_gender = info.match_gender,
            stage = selection.stage,
            count = context.metrics.message_count,
            stage_block = templates::stage_guidance(selection.stage),
            goal_block = templates::goal_guidance(selection.goal),
            readiness = templates::readiness_line(selection.ready_for_goal),
            reminders = templates::REMINDERS,
        );

        if let (Some(tone), Some(tier)) = (context.tone(), selection.tone_tier) {
            let _ = write!(
                prompt,
                "\n\nMatch's Current State:\n\
                 - Engagement Level: {:.2}\n\
                 - Interest Level: {:.2}\n\
                 - Overall Sentiment: {}\n\n\
                 Adjust your approach based on their engagement:\n\
                 {}",
                tone.engagement,
                tone.interest,
                tone.sentiment.as_str(),
                templates::tier_guidance(tier),
            );
        }

        prompt
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(&ConversationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{MatchInfo, Sentiment, ToneAnalysis};

    fn context(stage: Stage, goal: Goal, tone: Option<ToneAnalysis>) -> ConversationContext {
        let mut context = ConversationContext::new(goal, MatchInfo::on_platform("Hinge"));
        context.match_info.conversation_stage = stage;
        context.match_info.tone_analysis = tone;
        context
    }

    fn engaged(engagement: f64) -> Option<ToneAnalysis> {
        Some(ToneAnalysis::new(0.5, engagement, Sentiment::Neutral))
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("prompt is missing block: {}", needle))
    }

    mod selection {
        use super::*;

        #[test]
        fn selects_context_stage_and_goal() {
            let composer = PromptComposer::default();
            for stage in Stage::ALL {
                for goal in Goal::ALL {
                    let selection = composer.select_blocks(&context(stage, goal, None));
                    assert_eq!(selection.stage, stage);
                    assert_eq!(selection.goal, goal);
                    assert_eq!(selection.tone_tier, None);
                }
            }
        }

        #[test]
        fn tier_thresholds_are_inclusive_lower_bounds() {
            let composer = PromptComposer::default();
            assert_eq!(composer.tier_for(0.7), EngagementTier::High);
            assert_eq!(composer.tier_for(0.69), EngagementTier::Medium);
            assert_eq!(composer.tier_for(0.4), EngagementTier::Medium);
            assert_eq!(composer.tier_for(0.39), EngagementTier::Low);
            assert_eq!(composer.tier_for(0.0), EngagementTier::Low);
        }

        #[test]
        fn tone_present_selects_exactly_one_tier() {
            let composer = PromptComposer::default();
            let selection =
                composer.select_blocks(&context(Stage::Advancing, Goal::AskOut, engaged(0.9)));
            assert_eq!(selection.tone_tier, Some(EngagementTier::High));
        }

        #[test]
        fn ready_for_goal_once_count_reaches_limit() {
            let composer = PromptComposer::default();
            let mut ctx = context(Stage::Advancing, Goal::SetDate, None);

            ctx.metrics.message_count = 9;
            assert!(!composer.select_blocks(&ctx).ready_for_goal);

            ctx.metrics.message_count = 10;
            assert!(composer.select_blocks(&ctx).ready_for_goal);
        }

        #[test]
        fn thresholds_follow_config() {
            let composer = PromptComposer::new(&ConversationConfig {
                high_engagement_threshold: 0.9,
                medium_engagement_threshold: 0.2,
                ..Default::default()
            });
            assert_eq!(composer.tier_for(0.8), EngagementTier::Medium);
            assert_eq!(composer.tier_for(0.25), EngagementTier::Medium);
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn blocks_appear_in_stage_goal_tone_order() {
            let composer = PromptComposer::default();
            let prompt = composer.compose(&context(Stage::Closing, Goal::SetDate, engaged(0.5)));

            let stage = position(&prompt, templates::stage_guidance(Stage::Closing));
            let goal = position(&prompt, templates::goal_guidance(Goal::SetDate));
            let tier = position(&prompt, templates::tier_guidance(EngagementTier::Medium));
            assert!(stage < goal && goal < tier);
        }

        #[test]
        fn includes_only_selected_blocks() {
            let composer = PromptComposer::default();
            let prompt =
                composer.compose(&context(Stage::BuildingRapport, Goal::AskOut, engaged(0.1)));

            for stage in Stage::ALL {
                let present = prompt.contains(templates::stage_guidance(stage));
                assert_eq!(present, stage == Stage::BuildingRapport, "stage {}", stage);
            }
            for goal in Goal::ALL {
                let present = prompt.contains(templates::goal_guidance(goal));
                assert_eq!(present, goal == Goal::AskOut, "goal {}", goal);
            }
            for tier in [EngagementTier::High, EngagementTier::Medium, EngagementTier::Low] {
                let present = prompt.contains(templates::tier_guidance(tier));
                assert_eq!(present, tier == EngagementTier::Low, "tier {:?}", tier);
            }
        }

        #[test]
        fn omits_tone_section_without_analysis() {
            let prompt = PromptComposer::default()
                .compose(&context(Stage::Initial, Goal::BuildRapport, None));
            assert!(!prompt.contains("Match's Current State"));
            assert!(!prompt.contains("Adjust your approach"));
        }

        #[test]
        fn mentions_platform_goal_and_match_details() {
            let mut ctx = context(Stage::Initial, Goal::GetPhoneNumber, engaged(0.75));
            ctx.match_info.match_gender = "female".to_string();
            ctx.metrics.message_count = 1;

            let prompt = PromptComposer::default().compose(&ctx);
            assert!(prompt.contains("engaging conversations on Hinge."));
            assert!(prompt.contains("Goal: GET_PHONE_NUMBER"));
            assert!(prompt.contains("Match Gender: female"));
            assert!(prompt.contains("Current Stage: initial"));
            assert!(prompt.contains("Message Count: 1"));
            assert!(prompt.contains("- Engagement Level: 0.75"));
            assert!(prompt.contains("- Overall Sentiment: neutral"));
        }

        #[test]
        fn readiness_line_follows_goal_block() {
            let mut ctx = context(Stage::Closing, Goal::SetDate, None);
            ctx.metrics.message_count = 12;
            let prompt = PromptComposer::default().compose(&ctx);

            let expected = format!(
                "{}\n{}",
                templates::goal_guidance(Goal::SetDate),
                templates::readiness_line(true)
            );
            assert!(prompt.contains(&expected));
            assert!(!prompt.contains(templates::readiness_line(false)));
        }

        #[test]
        fn composition_is_deterministic() {
            let composer = PromptComposer::default();
            let ctx = context(Stage::Advancing, Goal::AskOut, engaged(0.6));
            assert_eq!(composer.compose(&ctx), composer.compose(&ctx));
        }
    }
}
