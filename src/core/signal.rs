//! The haystack: an immutable character stream
//!
//! Windows are addressed by character offset, not byte offset.

use crate::error::{DecodeError, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Immutable signal text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    chars: Vec<char>,
}

impl Signal {
    /// Wrap a string as a signal, unchanged
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            chars: text.as_ref().chars().collect(),
        }
    }

    /// Load a signal from a file, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::SignalNotFound`] if the file does not exist and
    /// [`DecodeError::Io`] for any other read failure.
    ///
    /// # Examples
    /// ```no_run
    /// use signal_decoder::core::Signal;
    ///
    /// let signal = Signal::load("signal.txt").unwrap();
    /// println!("Signal loaded: {} characters", signal.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                DecodeError::SignalNotFound(path.to_path_buf())
            } else {
                DecodeError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Ok(Self::new(content.trim()))
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of start positions for windows of `length` characters
    ///
    /// Zero when the signal is shorter than `length`.
    #[must_use]
    pub fn window_count(&self, length: usize) -> usize {
        if length == 0 || length > self.chars.len() {
            0
        } else {
            self.chars.len() - length + 1
        }
    }

    /// The window of `length` characters starting at `position`
    ///
    /// Returns `None` if the window would run past the end of the signal.
    #[must_use]
    pub fn window(&self, position: usize, length: usize) -> Option<String> {
        let end = position.checked_add(length)?;
        self.chars.get(position..end).map(|w| w.iter().collect())
    }
}

/// Count the distinct alphabetic characters in `text`
#[must_use]
pub fn distinct_letters(text: &str) -> usize {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .collect::<FxHashSet<char>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn window_count_for_various_lengths() {
        let signal = Signal::new("ABCDEFGHIJ");
        assert_eq!(signal.window_count(10), 1);
        assert_eq!(signal.window_count(3), 8);
        assert_eq!(signal.window_count(11), 0);
        assert_eq!(signal.window_count(0), 0);
    }

    #[test]
    fn window_extraction() {
        let signal = Signal::new("XYZ ABC XYZ");
        assert_eq!(signal.window(0, 3).as_deref(), Some("XYZ"));
        assert_eq!(signal.window(4, 7).as_deref(), Some("ABC XYZ"));
        assert_eq!(signal.window(5, 7), None);
        assert_eq!(signal.window(usize::MAX, 2), None);
    }

    #[test]
    fn windows_use_character_offsets() {
        let signal = Signal::new("ÉA BÉ");
        assert_eq!(signal.len(), 5);
        assert_eq!(signal.window(3, 2).as_deref(), Some("BÉ"));
    }

    #[test]
    fn distinct_letters_ignores_non_letters() {
        assert_eq!(distinct_letters("AAB, 123 ?!"), 2);
        assert_eq!(distinct_letters(""), 0);
        assert_eq!(distinct_letters("ABCDEFGHIJKLMNOPQRSTUVWXYZ"), 26);
    }

    #[test]
    fn load_trims_whitespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  XYZ ABC  ").unwrap();

        let signal = Signal::load(file.path()).unwrap();
        assert_eq!(signal, Signal::new("XYZ ABC"));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("signal.txt");

        let result = Signal::load(&missing);
        assert!(matches!(result, Err(DecodeError::SignalNotFound(p)) if p == missing));
    }
}
