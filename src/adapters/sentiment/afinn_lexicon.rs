//! AFINN-style word list sentiment scoring.
//!
//! Each known word carries an integer valence in `[-5, 5]`. A message's score
//! is the sum over its tokens, with the sign of a word flipped when the token
//! before it is a negator ("not fun" scores like "boring"). The comparative
//! score divides by the token count so long and short messages compare.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::ports::SentimentLexicon;

/// Tokens that flip the valence of the word that follows them.
pub const NEGATORS: [&str; 20] = [
    "not", "no", "never", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "isnt",
    "isn't", "wasnt", "wasn't", "cant", "can't", "wont", "won't", "arent", "aren't", "aint",
];

static WORD_SCORES: Lazy<HashMap<&'static str, i32>> =
    Lazy::new(|| AFINN_WORDS.iter().copied().collect());

/// Score breakdown for a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentScore {
    /// Sum of word valences after negation.
    pub score: i32,
    /// Number of tokens in the text.
    pub token_count: usize,
    /// `score / token_count`, or 0 when there are no tokens.
    pub comparative: f64,
}

/// Sentiment lexicon backed by an embedded AFINN-style word list.
#[derive(Debug, Clone, Default)]
pub struct AfinnLexicon {
    overrides: HashMap<String, i32>,
}

impl AfinnLexicon {
    /// Creates a lexicon using the embedded word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the valence of a word. Values are clamped to `[-5, 5]`.
    pub fn with_word(mut self, word: impl Into<String>, valence: i32) -> Self {
        self.overrides
            .insert(word.into().to_lowercase(), valence.clamp(-5, 5));
        self
    }

    /// Valence of a single lowercase word, if known.
    pub fn valence(&self, word: &str) -> Option<i32> {
        self.overrides
            .get(word)
            .copied()
            .or_else(|| WORD_SCORES.get(word).copied())
    }

    /// Scores `text`.
    pub fn analyze(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);
        let mut score = 0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(valence) = self.valence(token) else {
                continue;
            };
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            score += if negated { -valence } else { valence };
        }

        let comparative = if tokens.is_empty() {
            0.0
        } else {
            f64::from(score) / tokens.len() as f64
        };

        SentimentScore {
            score,
            token_count: tokens.len(),
            comparative,
        }
    }
}

impl SentimentLexicon for AfinnLexicon {
    fn comparative(&self, text: &str) -> f64 {
        self.analyze(text).comparative
    }
}

/// Lowercase tokens; anything other than letters, digits, or apostrophes separates.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[rustfmt::skip]
const AFINN_WORDS: &[(&str, i32)] = &[
    // positive
    ("adorable", 3), ("adventure", 2), ("adventurous", 2), ("agree", 1), ("amazing", 4),
    ("amazed", 2), ("amused", 3), ("attractive", 2), ("awesome", 4), ("beautiful", 3),
    ("best", 3), ("better", 2), ("bliss", 3), ("brilliant", 4), ("calm", 2),
    ("care", 2), ("charming", 3), ("cheer", 2), ("cheerful", 2), ("clever", 2),
    ("comfortable", 2), ("confident", 2), ("cool", 1), ("curious", 1), ("cute", 2),
    ("delicious", 3), ("delight", 3), ("delighted", 3), ("easy", 1), ("energetic", 2),
    ("enjoy", 2), ("enjoyed", 2), ("enjoying", 2), ("excellent", 3), ("excited", 3),
    ("exciting", 3), ("fabulous", 4), ("fantastic", 4), ("favorite", 2), ("favourite", 2),
    ("fine", 2), ("free", 1), ("friendly", 2), ("fun", 4), ("funny", 4),
    ("glad", 3), ("good", 3), ("gorgeous", 3), ("grateful", 3), ("great", 3),
    ("haha", 3), ("happy", 3), ("hilarious", 2), ("honest", 2), ("hope", 2),
    ("hopeful", 2), ("impressed", 3), ("impressive", 3), ("inspired", 2), ("interested", 2),
    ("interesting", 2), ("joy", 3), ("keen", 1), ("kind", 2), ("laugh", 1),
    ("laughing", 1), ("like", 2), ("liked", 2), ("likes", 2), ("lol", 3),
    ("love", 3), ("loved", 3), ("lovely", 3), ("loves", 3), ("loving", 2),
    ("lucky", 3), ("nice", 3), ("outstanding", 5), ("passionate", 2), ("perfect", 3),
    ("perfectly", 3), ("play", 1), ("playful", 2), ("pleasant", 3), ("please", 1),
    ("pleased", 3), ("pretty", 1), ("proud", 2), ("relaxed", 2), ("relaxing", 2),
    ("romantic", 2), ("safe", 1), ("smart", 1), ("smile", 2), ("smiling", 2),
    ("special", 2), ("stunning", 4), ("superb", 5), ("sure", 1), ("sweet", 2),
    ("terrific", 4), ("thank", 2), ("thanks", 2), ("thrilled", 5), ("top", 2),
    ("true", 2), ("welcome", 2), ("win", 4), ("wonderful", 4), ("worth", 2),
    ("wow", 4), ("yeah", 1), ("yes", 1), ("yummy", 3),
    // negative
    ("alone", -2), ("angry", -3), ("annoyed", -2), ("annoying", -2), ("anxious", -2),
    ("awful", -3), ("awkward", -2), ("bad", -3), ("bitter", -2), ("bored", -2),
    ("boring", -3), ("broken", -1), ("busy", -1), ("cheap", -2), ("creepy", -2),
    ("cry", -1), ("crying", -2), ("depressed", -2), ("disappointed", -2), ("disappointing", -2),
    ("disgusting", -3), ("dislike", -2), ("dull", -2), ("dumb", -3), ("fail", -2),
    ("failed", -2), ("fake", -3), ("fear", -2), ("gross", -2), ("hate", -3),
    ("hated", -3), ("hates", -3), ("horrible", -3), ("hurt", -2), ("ignore", -1),
    ("ignored", -2), ("lame", -2), ("lonely", -2), ("lost", -3), ("mad", -3),
    ("mean", -2), ("miss", -2), ("nervous", -2), ("no", -1), ("pain", -2),
    ("pathetic", -2), ("problem", -2), ("rejected", -1), ("rude", -2), ("sad", -2),
    ("scared", -2), ("shame", -2), ("sick", -2), ("sorry", -1), ("stop", -1),
    ("stressed", -2), ("stupid", -2), ("terrible", -3), ("tired", -2), ("ugly", -3),
    ("unfortunately", -2), ("unhappy", -2), ("upset", -2), ("useless", -2), ("waste", -1),
    ("weird", -2), ("worried", -3), ("worse", -3), ("worst", -3), ("wrong", -2),
];

#[cfg(test)]
mod tests {
    use super::*;

    mod tokenizer {
        use super::*;

        #[test]
        fn keeps_apostrophes_inside_words() {
            assert_eq!(
                tokenize("Don't stop, what's up?"),
                vec!["don't", "stop", "what's", "up"]
            );
        }

        #[test]
        fn strips_quote_marks_around_words() {
            assert_eq!(tokenize("'fun' night"), vec!["fun", "night"]);
        }
    }

    mod scoring {
        use super::*;

        #[test]
        fn sums_known_words() {
            let result = AfinnLexicon::new().analyze("Hey! I love hiking, what's your favorite trail?");
            assert_eq!(result.score, 5);
            assert_eq!(result.token_count, 8);
            assert!((result.comparative - 0.625).abs() < 1e-9);
        }

        #[test]
        fn negator_flips_following_word() {
            let result = AfinnLexicon::new().analyze("that was not fun");
            assert_eq!(result.score, -4);
        }

        #[test]
        fn negator_only_affects_next_token() {
            let result = AfinnLexicon::new().analyze("not really fun");
            assert_eq!(result.score, 4);
        }

        #[test]
        fn unknown_words_score_zero() {
            let result = AfinnLexicon::new().analyze("the trail goes north");
            assert_eq!(result.score, 0);
            assert_eq!(result.comparative, 0.0);
        }

        #[test]
        fn empty_text_has_zero_comparative() {
            let result = AfinnLexicon::new().analyze("?!");
            assert_eq!(result.token_count, 0);
            assert_eq!(result.comparative, 0.0);
        }

        #[test]
        fn case_is_ignored() {
            assert_eq!(AfinnLexicon::new().analyze("AWESOME").score, 4);
        }

        #[test]
        fn overrides_take_precedence_and_clamp() {
            let lexicon = AfinnLexicon::new().with_word("Hiking", 9).with_word("fun", -1);
            assert_eq!(lexicon.valence("hiking"), Some(5));
            assert_eq!(lexicon.valence("fun"), Some(-1));
        }

        #[test]
        fn table_values_stay_in_range() {
            for (word, valence) in AFINN_WORDS {
                assert!((-5..=5).contains(valence), "{} out of range", word);
            }
        }
    }

    #[test]
    fn implements_sentiment_lexicon_port() {
        let lexicon: &dyn SentimentLexicon = &AfinnLexicon::new();
        assert!(lexicon.comparative("this is boring and awful") < -0.2);
        assert!(lexicon.comparative("wow amazing") > 0.2);
    }
}
