//! Heuristic "Englishness" scoring
//!
//! Rewards dictionary hits, penalizes implausible token shapes and rewards
//! letter distributions close to English. Not a language model.

use crate::reference::ReferenceData;

/// Score returned for text with no whitespace-separated tokens
pub const UNSCOREABLE: f64 = -1000.0;

const COMMON_WORD_BONUS: f64 = 10.0;
const LONG_TOKEN_LEN: usize = 15;
const LONG_TOKEN_PENALTY: f64 = 20.0;
const STRAY_LETTER_PENALTY: f64 = 5.0;
const PLAUSIBLE_TOKEN_BONUS: f64 = 1.0;
const FREQUENCY_CEILING: f64 = 50.0;
const FREQUENCY_SCALE: f64 = 1000.0;
const TERMINATOR_BONUS: f64 = 20.0;

/// A fitness function over decrypted text
///
/// Higher is better. Implementations must be pure and thread-safe since the
/// scanner calls them from rayon workers.
pub trait Fitness: Sync {
    fn score(&self, text: &str) -> f64;
}

/// The default English quality scorer
#[derive(Debug, Clone, Copy)]
pub struct EnglishScorer<'a> {
    reference: &'a ReferenceData,
}

impl<'a> EnglishScorer<'a> {
    #[must_use]
    pub const fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// Word-shape component for a single token
    #[must_use]
    pub fn token_score(&self, token: &str) -> f64 {
        let upper = token.to_uppercase();
        let len = token.chars().count();
        let mut score = 0.0;

        if self.reference.is_common_word(&upper) {
            score += COMMON_WORD_BONUS;
        }

        if len > LONG_TOKEN_LEN {
            score -= LONG_TOKEN_PENALTY;
        } else if len == 1 && upper != "A" && upper != "I" {
            score -= STRAY_LETTER_PENALTY;
        } else if (3..=8).contains(&len) {
            score += PLAUSIBLE_TOKEN_BONUS;
        }

        score
    }

    /// Letter-distribution component over the concatenated tokens
    ///
    /// Each expected letter contributes `max(0, 50 - |expected - actual| * 1000)`.
    #[must_use]
    pub fn frequency_score(&self, tokens: &[&str]) -> f64 {
        let mut counts = [0usize; 26];
        let mut total = 0usize;

        for c in tokens.iter().flat_map(|t| t.chars()) {
            total += 1;
            if c.is_ascii_uppercase() {
                counts[(c as u8 - b'A') as usize] += 1;
            }
        }

        if total == 0 {
            return 0.0;
        }

        self.reference
            .expected_frequencies()
            .iter()
            .map(|&(letter, expected)| {
                let observed = if letter.is_ascii_uppercase() {
                    counts[(letter as u8 - b'A') as usize]
                } else {
                    0
                };
                let actual = observed as f64 / total as f64;
                (FREQUENCY_CEILING - (expected - actual).abs() * FREQUENCY_SCALE).max(0.0)
            })
            .sum()
    }
}

impl Fitness for EnglishScorer<'_> {
    /// Score `text`; returns [`UNSCOREABLE`] when it has no tokens
    ///
    /// # Examples
    /// ```
    /// use signal_decoder::reference::ReferenceData;
    /// use signal_decoder::solver::{EnglishScorer, Fitness, UNSCOREABLE};
    ///
    /// let reference = ReferenceData::embedded();
    /// let scorer = EnglishScorer::new(&reference);
    ///
    /// assert_eq!(scorer.score(""), UNSCOREABLE);
    /// assert!(scorer.score("THE AND") > scorer.score("ZZZ ZZZ"));
    /// ```
    fn score(&self, text: &str) -> f64 {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return UNSCOREABLE;
        }

        let mut score: f64 = tokens.iter().map(|t| self.token_score(t)).sum();
        score += self.frequency_score(&tokens);

        if text.contains(['.', '!', '?']) {
            score += TERMINATOR_BONUS;
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_text_is_unscoreable() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);
        assert!(approx(scorer.score(""), UNSCOREABLE));
        assert!(approx(scorer.score("   \n\t "), UNSCOREABLE));
    }

    #[test]
    fn dictionary_hits_dominate() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);
        assert!(scorer.score("THE AND") > scorer.score("ZZZ ZZZ"));
    }

    #[test]
    fn the_and_exact_value() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);
        // 2 × (10 + 1) for the words, plus E: 50 - |0.127 - 1/6| × 1000
        let expected = 22.0 + (50.0 - (0.127_f64 - 1.0 / 6.0).abs() * 1000.0);
        assert!(approx(scorer.score("THE AND"), expected));
    }

    #[test]
    fn token_shape_rules() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);

        assert!(approx(scorer.token_score("A"), 10.0));
        assert!(approx(scorer.token_score("i"), 10.0));
        assert!(approx(scorer.token_score("Q"), -5.0));
        assert!(approx(scorer.token_score("QX"), 0.0));
        assert!(approx(scorer.token_score("QXZ"), 1.0));
        assert!(approx(scorer.token_score("QXZQXZQX"), 1.0));
        assert!(approx(scorer.token_score("QXZQXZQXZ"), 0.0));
        assert!(approx(scorer.token_score("QXZQXZQXZQXZQXZQ"), -20.0));
        // dictionary lookup is case-insensitive
        assert!(approx(scorer.token_score("through"), 11.0));
    }

    #[test]
    fn terminator_bonus() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);
        let base = scorer.score("QXZ QXZ");
        assert!(approx(scorer.score("QXZ QXZ."), base + 20.0));
        assert!(approx(scorer.score("QXZ! QXZ?"), base + 20.0));
    }

    #[test]
    fn frequency_score_rewards_english_distribution() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);

        let english = scorer.frequency_score(&["NOTATIONS", "ENTERTAIN", "ONE"]);
        let flat = scorer.frequency_score(&["ZZZZ", "QQQQ"]);
        assert!(english > flat);
        assert!(approx(flat, 0.0));
        assert!(approx(scorer.frequency_score(&[]), 0.0));
    }

    #[test]
    fn punctuation_counts_toward_total() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);
        // E is 1/8 of the letters without the period and 1/9 with it
        let without = scorer.frequency_score(&["EQQQQQQQ"]);
        let with_dot = scorer.frequency_score(&["EQQQQQQQ."]);
        assert!(approx(without, 50.0 - (0.127_f64 - 0.125).abs() * 1000.0));
        assert!(with_dot < without);
    }

    #[test]
    fn custom_dictionary() {
        let reference = ReferenceData::embedded().with_common_words(["XYZZY"]);
        let scorer = EnglishScorer::new(&reference);
        assert!(approx(scorer.token_score("XYZZY"), 11.0));
        assert!(approx(scorer.token_score("THE"), 1.0));
    }
}
