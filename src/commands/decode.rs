//! Signal decoding command
//!
//! Scans the whole signal and summarizes the best window.

use crate::config::DecoderConfig;
use crate::core::Signal;
use crate::error::Result;
use crate::reference::ReferenceData;
use crate::solver::{
    EnglishScorer, MessageStats, ScanProgress, ScanReport, WindowScanner, extract_first_nine,
};

/// Result of decoding a signal
pub struct DecodeReport {
    pub signal_length: usize,
    pub message_length: usize,
    pub scan: ScanReport,
    /// First nine words of the best decryption
    pub first_words: Option<String>,
    pub stats: Option<MessageStats>,
}

/// Find and decrypt the hidden message in `signal`
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn decode_signal<P: ScanProgress + ?Sized>(
    signal: &Signal,
    config: &DecoderConfig,
    reference: &ReferenceData,
    progress: &P,
) -> Result<DecodeReport> {
    config.validate()?;

    let scorer = EnglishScorer::new(reference);
    let scanner = WindowScanner::new(&scorer, reference, config.clone());
    let scan = scanner.scan(signal, progress);

    let first_words = scan
        .best
        .as_ref()
        .map(|best| extract_first_nine(&best.decrypted));
    let stats = scan
        .best
        .as_ref()
        .map(|best| MessageStats::from_text(&best.decrypted));

    Ok(DecodeReport {
        signal_length: signal.len(),
        message_length: config.message_length,
        scan,
        first_words,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::solver::NoProgress;

    #[test]
    fn decode_whole_signal() {
        let reference = ReferenceData::embedded();
        let config = DecoderConfig::default()
            .with_message_length(11)
            .with_diversity_threshold(3);

        let report =
            decode_signal(&Signal::new("XYZ ABC XYZ"), &config, &reference, &NoProgress).unwrap();

        assert_eq!(report.signal_length, 11);
        assert_eq!(report.message_length, 11);
        assert!(report.scan.best.is_some());
        assert_eq!(report.first_words.as_deref().map(|w| w.split(' ').count()), Some(3));
        assert_eq!(report.stats.unwrap().word_count, 3);
    }

    #[test]
    fn no_eligible_window_gives_no_result() {
        let reference = ReferenceData::embedded();
        let config = DecoderConfig::default().with_message_length(5);

        let report =
            decode_signal(&Signal::new("AAAAAAAA"), &config, &reference, &NoProgress).unwrap();

        assert!(report.scan.best.is_none());
        assert!(report.first_words.is_none());
        assert!(report.stats.is_none());
        assert_eq!(report.scan.positions_skipped, 4);
    }

    #[test]
    fn invalid_config_rejected() {
        let reference = ReferenceData::embedded();
        let config = DecoderConfig::default().with_rounds(0);

        let result = decode_signal(&Signal::new("ABC"), &config, &reference, &NoProgress);
        assert!(matches!(result, Err(DecodeError::InvalidConfig(_))));
    }
}
