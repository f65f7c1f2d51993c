//! Sentiment Lexicon Port - Word-level sentiment scoring.

/// Scores text for sentiment.
///
/// Implementations must be deterministic: the same text always yields the
/// same score.
pub trait SentimentLexicon: Send + Sync {
    /// Comparative sentiment of `text`: the total score divided by the
    /// number of tokens.
    ///
    /// Roughly centered at zero and in practice within `[-5, 5]`.
    /// Text without tokens scores `0.0`.
    fn comparative(&self, text: &str) -> f64;
}
