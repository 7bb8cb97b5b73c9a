//! Static English reference data
//!
//! Common-word dictionary, short-word tables and letter statistics, bundled
//! into an immutable [`ReferenceData`] value that is passed explicitly to the
//! scorer and the mapping initializer.

mod embedded;
pub mod loader;

pub use embedded::{COMMON_WORDS, COMMON_WORDS_COUNT, SHORT_WORDS, SHORT_WORDS_COUNT};

use rustc_hash::FxHashSet;

/// Longest word length covered by the short-word tables
pub const MAX_SHORT_WORD_LEN: usize = 4;

/// Plaintext letters from most to least common in English
pub const ENGLISH_FREQUENCY_ORDER: [char; 26] = [
    'E', 'T', 'A', 'O', 'I', 'N', 'S', 'H', 'R', 'U', 'L', 'D', 'C', 'M', 'W', 'F', 'G', 'Y', 'P',
    'B', 'V', 'K', 'J', 'X', 'Q', 'Z',
];

/// Expected relative frequency of the six most common English letters
pub const EXPECTED_FREQUENCIES: [(char, f64); 6] = [
    ('E', 0.127),
    ('T', 0.091),
    ('A', 0.082),
    ('O', 0.075),
    ('I', 0.070),
    ('N', 0.067),
];

/// Immutable English reference tables
///
/// Cheap to share across threads by reference.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    common_words: FxHashSet<String>,
    short_words: [Vec<String>; MAX_SHORT_WORD_LEN],
    frequency_order: Vec<char>,
    expected_frequencies: Vec<(char, f64)>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::embedded()
    }
}

impl ReferenceData {
    /// Reference data compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let mut short_words: [Vec<String>; MAX_SHORT_WORD_LEN] = Default::default();
        for word in loader::words_from_slice(SHORT_WORDS) {
            let len = word.chars().count();
            if (1..=MAX_SHORT_WORD_LEN).contains(&len) && !short_words[len - 1].contains(&word) {
                short_words[len - 1].push(word);
            }
        }

        Self {
            common_words: loader::words_from_slice(COMMON_WORDS).into_iter().collect(),
            short_words,
            frequency_order: ENGLISH_FREQUENCY_ORDER.to_vec(),
            expected_frequencies: EXPECTED_FREQUENCIES.to_vec(),
        }
    }

    /// Replace the common-word dictionary
    #[must_use]
    pub fn with_common_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.common_words = words
            .into_iter()
            .map(|w| w.as_ref().to_uppercase())
            .collect();
        self
    }

    /// Check an uppercase token against the common-word dictionary
    #[inline]
    #[must_use]
    pub fn is_common_word(&self, upper: &str) -> bool {
        self.common_words.contains(upper)
    }

    #[must_use]
    pub fn common_word_count(&self) -> usize {
        self.common_words.len()
    }

    /// Known English words of exactly `len` letters, most likely first
    ///
    /// Empty for lengths outside `1..=MAX_SHORT_WORD_LEN`. Seeding reads only
    /// the one-letter table; the longer tables are reference data for
    /// strategies that pin two- to four-letter tokens.
    #[must_use]
    pub fn short_words(&self, len: usize) -> &[String] {
        match len {
            1..=MAX_SHORT_WORD_LEN => &self.short_words[len - 1],
            _ => &[],
        }
    }

    /// Plaintext letters in canonical frequency order
    #[must_use]
    pub fn frequency_order(&self) -> &[char] {
        &self.frequency_order
    }

    #[must_use]
    pub fn expected_frequencies(&self) -> &[(char, f64)] {
        &self.expected_frequencies
    }
}
