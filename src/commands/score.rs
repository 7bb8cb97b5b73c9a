//! Text scoring command
//!
//! Scores an arbitrary text with the English quality heuristic.

use crate::reference::ReferenceData;
use crate::solver::{EnglishScorer, Fitness};

/// Result of scoring a text
pub struct ScoreResult {
    pub text: String,
    pub score: f64,
    pub token_count: usize,
    pub dictionary_hits: usize,
}

/// Score `text` and count its dictionary hits
#[must_use]
pub fn score_text(text: &str, reference: &ReferenceData) -> ScoreResult {
    let scorer = EnglishScorer::new(reference);
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let dictionary_hits = tokens
        .iter()
        .filter(|t| reference.is_common_word(&t.to_uppercase()))
        .count();

    ScoreResult {
        text: text.to_string(),
        score: scorer.score(text),
        token_count: tokens.len(),
        dictionary_hits,
    }
}
