//! Command implementations

pub mod decode;
pub mod inspect;
pub mod score;

pub use decode::{DecodeReport, decode_signal};
pub use inspect::{Inspection, inspect_window};
pub use score::{ScoreResult, score_text};
