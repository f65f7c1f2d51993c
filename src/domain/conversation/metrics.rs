//! Running conversation metrics.

use serde::{Deserialize, Serialize};

use super::context::ConversationContext;
use super::message::Message;
use crate::domain::foundation::{clamp_unit, is_unit, ValidationError};

/// Aggregates recomputed from the full message log every turn.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metrics {
    /// Number of messages in the log.
    pub message_count: usize,
    /// Mean gap between consecutive messages, in seconds.
    pub average_response_time: f64,
    /// Blend of rapport and stage weight, in `[0, 1]`.
    pub goal_progress: f64,
}

impl Metrics {
    /// Checks value ranges. Agreement with the log is checked by the context.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.average_response_time.is_finite() || self.average_response_time < 0.0 {
            return Err(ValidationError::out_of_range(
                "metrics.averageResponseTime",
                0.0,
                f64::MAX,
                self.average_response_time,
            ));
        }
        if !is_unit(self.goal_progress) {
            return Err(ValidationError::out_of_range(
                "metrics.goalProgress",
                0.0,
                1.0,
                self.goal_progress,
            ));
        }
        Ok(())
    }
}

/// Computes [`Metrics`] for a context about to receive a new message.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsTracker;

impl MetricsTracker {
    pub fn new() -> Self {
        Self
    }

    /// Metrics as they will be once `new_message` is appended to `context`.
    ///
    /// Goal progress uses the tone and stage currently held in the context.
    /// The context itself is left untouched; the caller replaces its metrics.
    pub fn update(&self, context: &ConversationContext, new_message: &Message) -> Metrics {
        let message_count = context.messages.len() + 1;

        Metrics {
            message_count,
            average_response_time: average_gap_secs(&context.messages, new_message),
            goal_progress: goal_progress(context),
        }
    }
}

/// Mean of consecutive timestamp gaps across the log plus `new_message`.
///
/// Gaps between user and assistant messages both count. Out-of-order
/// timestamps contribute negative gaps; the mean is floored at zero.
fn average_gap_secs(messages: &[Message], new_message: &Message) -> f64 {
    if messages.is_empty() {
        return 0.0;
    }

    let timestamps: Vec<_> = messages
        .iter()
        .chain(std::iter::once(new_message))
        .map(Message::timestamp)
        .collect();

    let total: f64 = timestamps
        .windows(2)
        .map(|pair| pair[1].seconds_since(&pair[0]))
        .sum();

    (total / (timestamps.len() - 1) as f64).max(0.0)
}

fn goal_progress(context: &ConversationContext) -> f64 {
    let rapport = context
        .match_info
        .tone_analysis
        .map(|tone| tone.rapport_score())
        .unwrap_or(0.0);
    let stage_weight = context.match_info.conversation_stage.weight();

    clamp_unit((rapport + stage_weight) / 2.0)
}
