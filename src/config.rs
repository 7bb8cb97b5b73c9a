//! Decoder configuration
//!
//! All tunables of a scan in one validated value. The CLI maps its flags onto
//! this type; library callers can start from [`DecoderConfig::default`].

use crate::error::{DecodeError, Result};
use crate::solver::DEFAULT_ROUNDS;
use std::time::Duration;

/// Length of the hidden message in characters
pub const DEFAULT_MESSAGE_LENGTH: usize = 721;

/// Minimum distinct letters a window needs before it is analyzed
pub const DEFAULT_DIVERSITY_THRESHOLD: usize = 15;

/// Positions between progress log lines
pub const DEFAULT_PROGRESS_EVERY: usize = 2000;

/// Signal file read when no path is given
pub const DEFAULT_SIGNAL_PATH: &str = "signal.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    pub message_length: usize,
    pub diversity_threshold: usize,
    /// Hill-climbing rounds per window
    pub rounds: usize,
    /// Log a progress line every this many positions; 0 disables it
    pub progress_every: usize,
    /// Visit at most this many positions, starting from 0
    pub max_positions: Option<usize>,
    /// Stop starting new windows once this much time has passed
    pub time_limit: Option<Duration>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            message_length: DEFAULT_MESSAGE_LENGTH,
            diversity_threshold: DEFAULT_DIVERSITY_THRESHOLD,
            rounds: DEFAULT_ROUNDS,
            progress_every: DEFAULT_PROGRESS_EVERY,
            max_positions: None,
            time_limit: None,
        }
    }
}

impl DecoderConfig {
    /// Check the configuration before a scan
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidConfig`] if the message length or the
    /// round budget is zero.
    pub fn validate(&self) -> Result<()> {
        if self.message_length == 0 {
            return Err(DecodeError::InvalidConfig(
                "message length must be at least 1".to_string(),
            ));
        }
        if self.rounds == 0 {
            return Err(DecodeError::InvalidConfig(
                "hill-climbing needs at least 1 round".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub const fn with_message_length(mut self, message_length: usize) -> Self {
        self.message_length = message_length;
        self
    }

    #[must_use]
    pub const fn with_diversity_threshold(mut self, diversity_threshold: usize) -> Self {
        self.diversity_threshold = diversity_threshold;
        self
    }

    #[must_use]
    pub const fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub const fn with_max_positions(mut self, max_positions: Option<usize>) -> Self {
        self.max_positions = max_positions;
        self
    }

    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }
}
