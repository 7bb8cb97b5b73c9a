//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file, one word per line
///
/// Words are uppercased; blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use signal_decoder::reference::loader::load_from_file;
///
/// let words = load_from_file("data/common_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_uppercase)
        .collect()
}

/// Convert an embedded string slice to owned uppercase words
///
/// # Examples
/// ```
/// use signal_decoder::reference::loader::words_from_slice;
/// use signal_decoder::reference::COMMON_WORDS;
///
/// let words = words_from_slice(COMMON_WORDS);
/// assert_eq!(words.len(), COMMON_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|s| s.trim().to_uppercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_uppercases() {
        let words = words_from_slice(&["the", "And", "OF"]);
        assert_eq!(words, vec!["THE", "AND", "OF"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn lines_skip_blanks_and_comments() {
        let words = words_from_lines("# header\nthe\n\n  and  \n#skip\nof\n");
        assert_eq!(words, vec!["THE", "AND", "OF"]);
    }

    #[test]
    fn load_from_temp_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "signal\nnoise").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["SIGNAL", "NOISE"]);
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
