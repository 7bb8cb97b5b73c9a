//! Post-processing of the decrypted message

/// Number of leading words reported as the answer
pub const ANSWER_WORD_COUNT: usize = 9;

/// Join the first `count` whitespace-separated words with single spaces
///
/// Returns all words when there are fewer than `count`.
#[must_use]
pub fn first_words(text: &str, count: usize) -> String {
    text.split_whitespace()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first nine words of `text`
///
/// # Examples
/// ```
/// use signal_decoder::solver::extract_first_nine;
///
/// assert_eq!(extract_first_nine("ONE TWO THREE"), "ONE TWO THREE");
/// ```
#[must_use]
pub fn extract_first_nine(text: &str) -> String {
    first_words(text, ANSWER_WORD_COUNT)
}

/// Summary statistics of a decrypted message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageStats {
    pub word_count: usize,
    pub char_count: usize,
    pub average_word_length: f64,
}

impl MessageStats {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let (word_count, letters) = text
            .split_whitespace()
            .fold((0, 0), |(words, letters), w| (words + 1, letters + w.chars().count()));

        let average_word_length = if word_count > 0 {
            letters as f64 / word_count as f64
        } else {
            0.0
        };

        Self {
            word_count,
            char_count: text.chars().count(),
            average_word_length,
        }
    }
}
