//! Error types for signal loading and decoding

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("signal file not found: {}", .0.display())]
    SignalNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("position {position} is out of range (signal has {windows} windows of length {length})")]
    PositionOutOfRange {
        position: usize,
        windows: usize,
        length: usize,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
