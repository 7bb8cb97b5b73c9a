//! Frequency-based initial mapping
//!
//! Builds a starting cipher→plaintext mapping for a window:
//! 1. Profile the window's short tokens (lengths 1-4) by frequency
//! 2. Run the seed strategies (single-letter words by default)
//! 3. Fill the rest by pairing cipher symbols with English letters in frequency rank

use crate::core::{Mapping, rank_by_frequency};
use crate::reference::{MAX_SHORT_WORD_LEN, ReferenceData};
use tracing::trace;

/// How many of the most frequent tokens are kept per length
pub const TOP_TOKENS_PER_LENGTH: usize = 10;

/// Upper bound on symbols assigned from single-letter words
pub const MAX_SINGLE_LETTER_SEEDS: usize = 2;

const DOUBLED_LETTER_CANDIDATES: usize = 5;

/// Most frequent short tokens of a window, grouped by length
#[derive(Debug, Clone, Default)]
pub struct TokenProfile {
    by_length: [Vec<(String, usize)>; MAX_SHORT_WORD_LEN],
}

impl TokenProfile {
    /// Profile the whitespace-separated tokens of `text`
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut grouped: [Vec<&str>; MAX_SHORT_WORD_LEN] = Default::default();
        for token in text.split_whitespace() {
            let len = token.chars().count();
            if (1..=MAX_SHORT_WORD_LEN).contains(&len) {
                grouped[len - 1].push(token);
            }
        }

        let mut profile = Self::default();
        for (slot, tokens) in profile.by_length.iter_mut().zip(grouped) {
            *slot = rank_by_frequency(tokens)
                .into_iter()
                .take(TOP_TOKENS_PER_LENGTH)
                .map(|(token, count)| (token.to_string(), count))
                .collect();
        }
        profile
    }

    /// The most frequent tokens of exactly `len` characters with their counts
    #[must_use]
    pub fn most_common(&self, len: usize) -> &[(String, usize)] {
        match len {
            1..=MAX_SHORT_WORD_LEN => &self.by_length[len - 1],
            _ => &[],
        }
    }
}

/// A seeding step run before the frequency fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStrategy {
    /// Pair the most frequent one-letter tokens with `A`, then `I`
    SingleLetterWords,
    /// Look for doubled-letter two-letter tokens
    ///
    /// Investigated, currently disabled: it inspects the profile but never
    /// assigns anything.
    DoubledLetterProbe,
}

impl SeedStrategy {
    fn seed(self, profile: &TokenProfile, reference: &ReferenceData, mapping: &mut Mapping) {
        match self {
            Self::SingleLetterWords => seed_single_letters(profile, reference, mapping),
            Self::DoubledLetterProbe => probe_doubled_letters(profile),
        }
    }
}

fn seed_single_letters(profile: &TokenProfile, reference: &ReferenceData, mapping: &mut Mapping) {
    let known = reference
        .short_words(1)
        .iter()
        .filter_map(|w| w.chars().next());

    let ciphers = profile
        .most_common(1)
        .iter()
        .filter_map(|(token, _)| token.chars().next())
        .filter(|c| c.is_alphabetic());

    for (cipher, plain) in ciphers.zip(known).take(MAX_SINGLE_LETTER_SEEDS) {
        if !mapping.contains_symbol(cipher) && !mapping.contains_plain(plain) {
            mapping.insert(cipher, plain);
        }
    }
}

fn probe_doubled_letters(profile: &TokenProfile) {
    for (token, count) in profile.most_common(2).iter().take(DOUBLED_LETTER_CANDIDATES) {
        let mut chars = token.chars();
        if let (Some(a), Some(b)) = (chars.next(), chars.next())
            && a == b
        {
            trace!(token = %token, count, "doubled-letter token observed, no assignment made");
        }
    }
}

/// Builds initial mappings from window statistics
#[derive(Debug, Clone)]
pub struct MappingInitializer<'a> {
    reference: &'a ReferenceData,
    strategies: Vec<SeedStrategy>,
}

impl<'a> MappingInitializer<'a> {
    /// Initializer with the default pipeline: single-letter seeding only
    #[must_use]
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self::with_strategies(reference, vec![SeedStrategy::SingleLetterWords])
    }

    /// Initializer running `strategies` in order before the frequency fallback
    #[must_use]
    pub const fn with_strategies(reference: &'a ReferenceData, strategies: Vec<SeedStrategy>) -> Self {
        Self {
            reference,
            strategies,
        }
    }

    #[must_use]
    pub fn strategies(&self) -> &[SeedStrategy] {
        &self.strategies
    }

    /// Build the initial mapping for a window
    ///
    /// Seeded symbols come first, then every remaining alphabetic cipher
    /// symbol in descending frequency order, each paired with the next
    /// unused plaintext letter in English frequency order. Symbols left over
    /// once the plaintext letters run out stay unmapped.
    ///
    /// # Examples
    /// ```
    /// use signal_decoder::reference::ReferenceData;
    /// use signal_decoder::solver::MappingInitializer;
    ///
    /// let reference = ReferenceData::embedded();
    /// let initializer = MappingInitializer::new(&reference);
    ///
    /// let mapping = initializer.initial_mapping("XYZ ABC XYZ");
    /// assert_eq!(mapping.get('X'), Some('E'));
    /// assert_eq!(mapping.get('Y'), Some('T'));
    /// ```
    #[must_use]
    pub fn initial_mapping(&self, window: &str) -> Mapping {
        let profile = TokenProfile::from_text(window);
        let mut mapping = Mapping::new();

        for strategy in &self.strategies {
            strategy.seed(&profile, self.reference, &mut mapping);
        }

        let ranked_symbols = rank_by_frequency(
            window
                .split_whitespace()
                .flat_map(str::chars)
                .filter(|c| c.is_alphabetic()),
        );

        let mut remaining_plain = self
            .reference
            .frequency_order()
            .iter()
            .copied()
            .filter(|&p| !mapping.contains_plain(p))
            .collect::<Vec<char>>()
            .into_iter();

        for (symbol, _) in ranked_symbols {
            if mapping.contains_symbol(symbol) {
                continue;
            }
            match remaining_plain.next() {
                Some(plain) => mapping.insert(symbol, plain),
                None => break,
            }
        }

        mapping
    }
}
