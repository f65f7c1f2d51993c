//! Sentiment lexicon adapters.

mod afinn_lexicon;

pub use afinn_lexicon::{AfinnLexicon, SentimentScore, NEGATORS};
