//! Heuristic tone analysis of a single message.
//!
//! Scores how interested and engaged the match appears, plus an overall
//! sentiment. The scores are deterministic word and punctuation counts
//! blended with a lexicon-based sentiment figure; there is no language
//! understanding involved.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{clamp_unit, is_unit, ValidationError};
use crate::ports::SentimentLexicon;

/// Pronouns that signal the writer is talking about themselves or the reader.
pub const PERSONAL_PRONOUNS: [&str; 6] = ["i", "you", "we", "my", "your", "our"];

/// Markers of enthusiasm, counted the way a global regex scan counts them:
/// each match resumes after the previous one ("!!!" is three markers).
///
/// Occurrences inside longer words count too ("coolest" contains "cool",
/// "lovely" contains "love"), so enthusiastic text can be over-counted.
pub const ENTHUSIASTIC_MARKERS: [&str; 12] = [
    "!",
    "wow",
    "great",
    "awesome",
    "cool",
    "nice",
    "love",
    "perfect",
    "interesting",
    "amazing",
    "excellent",
    "fantastic",
];

/// Phrases that invite the conversation to continue.
pub const FOLLOW_UP_INDICATORS: [&str; 8] = [
    "what about",
    "how about",
    "tell me more",
    "and you",
    "what do you",
    "have you",
    "would you",
    "do you",
];

/// Comparative score above which a message reads as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.2;

/// Comparative score below which a message reads as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Overall sentiment of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classifies a comparative sentiment score.
    pub fn from_comparative(comparative: f64) -> Self {
        if comparative > POSITIVE_THRESHOLD {
            Self::Positive
        } else if comparative < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Wire name of the sentiment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// Scores derived from the most recent user message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneAnalysis {
    /// How interested the match appears, in `[0, 1]`.
    pub interest: f64,
    /// How much effort the match is putting in, in `[0, 1]`.
    pub engagement: f64,
    /// Overall sentiment.
    pub sentiment: Sentiment,
}

impl ToneAnalysis {
    /// Creates an analysis, clamping both scores into `[0, 1]`.
    pub fn new(interest: f64, engagement: f64, sentiment: Sentiment) -> Self {
        Self {
            interest: clamp_unit(interest),
            engagement: clamp_unit(engagement),
            sentiment,
        }
    }

    /// All-zero, neutral analysis.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, Sentiment::Neutral)
    }

    /// Average of engagement and interest.
    pub fn rapport_score(&self) -> f64 {
        (self.engagement + self.interest) / 2.0
    }

    /// Checks that both scores lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_unit(self.interest) {
            return Err(ValidationError::out_of_range(
                "matchInfo.toneAnalysis.interest",
                0.0,
                1.0,
                self.interest,
            ));
        }
        if !is_unit(self.engagement) {
            return Err(ValidationError::out_of_range(
                "matchInfo.toneAnalysis.engagement",
                0.0,
                1.0,
                self.engagement,
            ));
        }
        Ok(())
    }
}

/// Scores messages into a [`ToneAnalysis`].
///
/// Deterministic for a given input as long as the lexicon is.
#[derive(Clone)]
pub struct ToneAnalyzer {
    lexicon: Arc<dyn SentimentLexicon>,
}

impl ToneAnalyzer {
    /// Creates an analyzer backed by the given sentiment lexicon.
    pub fn new(lexicon: Arc<dyn SentimentLexicon>) -> Self {
        Self { lexicon }
    }

    /// Analyzes a single message.
    ///
    /// Blank input yields zero engagement, zero interest, and neutral sentiment.
    pub fn analyze(&self, message: &str) -> ToneAnalysis {
        if message.trim().is_empty() {
            return ToneAnalysis::zero();
        }

        let tokens = tokenize(message);
        let comparative = self.comparative(message);

        ToneAnalysis::new(
            interest_score(message, comparative),
            engagement_score(message, &tokens),
            Sentiment::from_comparative(comparative),
        )
    }

    fn comparative(&self, message: &str) -> f64 {
        let value = self.lexicon.comparative(message);
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

impl std::fmt::Debug for ToneAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToneAnalyzer").finish_non_exhaustive()
    }
}

/// Splits a message into lowercase word tokens.
///
/// Anything that is not a letter, digit, or underscore separates tokens,
/// so "what's" yields `["what", "s"]`.
pub fn tokenize(message: &str) -> Vec<String> {
    message
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn engagement_score(message: &str, tokens: &[String]) -> f64 {
    let length = (tokens.len() as f64 / 20.0).min(1.0);
    let questions = count_char(message, '?') as f64 * 0.2;
    let exclamations = count_char(message, '!') as f64 * 0.1;
    let pronouns = count_personal_pronouns(tokens) as f64 * 0.15;

    clamp_unit(length + questions + exclamations + pronouns)
}

fn interest_score(message: &str, comparative: f64) -> f64 {
    let sentiment = (comparative + 5.0) / 10.0;
    let question = if message.contains('?') { 0.2 } else { 0.0 };
    let enthusiasm = count_enthusiastic_markers(message) as f64 * 0.15;
    let follow_up = if has_follow_up_indicator(message) { 0.2 } else { 0.0 };

    clamp_unit(sentiment + question + enthusiasm + follow_up)
}

fn count_char(message: &str, needle: char) -> usize {
    message.chars().filter(|c| *c == needle).count()
}

fn count_personal_pronouns(tokens: &[String]) -> usize {
    tokens
        .iter()
        .filter(|token| PERSONAL_PRONOUNS.contains(&token.as_str()))
        .count()
}

fn count_enthusiastic_markers(message: &str) -> usize {
    let lower = message.to_lowercase();
    ENTHUSIASTIC_MARKERS
        .iter()
        .map(|marker| lower.matches(marker).count())
        .sum()
}

fn has_follow_up_indicator(message: &str) -> bool {
    let lower = message.to_lowercase();
    FOLLOW_UP_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator))
}
