//! Single-window inspection command
//!
//! Runs the pipeline on one start position and exposes the intermediate
//! mappings, including windows the diversity gate would skip.

use crate::config::DecoderConfig;
use crate::core::{Mapping, Signal, distinct_letters};
use crate::error::{DecodeError, Result};
use crate::reference::ReferenceData;
use crate::solver::{EnglishScorer, Refinement, WindowScanner};

/// Pipeline details for one window
pub struct Inspection {
    pub position: usize,
    pub window: String,
    pub distinct_letters: usize,
    /// Whether the diversity gate would admit this window during a scan
    pub eligible: bool,
    pub initial: Mapping,
    pub initial_score: f64,
    pub refined: Refinement,
    pub decrypted: String,
}

/// Analyze the window starting at `position`
///
/// # Errors
///
/// Returns an error if the configuration is invalid or `position` is not a
/// valid start position for the configured message length.
pub fn inspect_window(
    signal: &Signal,
    position: usize,
    config: &DecoderConfig,
    reference: &ReferenceData,
) -> Result<Inspection> {
    config.validate()?;

    let window = signal
        .window(position, config.message_length)
        .ok_or_else(|| DecodeError::PositionOutOfRange {
            position,
            windows: signal.window_count(config.message_length),
            length: config.message_length,
        })?;

    let scorer = EnglishScorer::new(reference);
    let scanner = WindowScanner::new(&scorer, reference, config.clone());
    let analysis = scanner.analyze_window(&window);
    let decrypted = analysis.refined.mapping.apply(&window);

    Ok(Inspection {
        position,
        distinct_letters: distinct_letters(&window),
        eligible: scanner.is_eligible(&window),
        window,
        initial: analysis.initial,
        initial_score: analysis.initial_score,
        refined: analysis.refined,
        decrypted,
    })
}
