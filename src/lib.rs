//! Signal Decoder
//!
//! Finds a fixed-length message enciphered with a monoalphabetic substitution
//! cipher inside a long noisy signal, and recovers its most plausible plaintext
//! without the key.
//!
//! # Quick Start
//!
//! ```rust
//! use signal_decoder::config::DecoderConfig;
//! use signal_decoder::core::Signal;
//! use signal_decoder::reference::ReferenceData;
//! use signal_decoder::solver::{EnglishScorer, NoProgress, WindowScanner};
//!
//! let reference = ReferenceData::embedded();
//! let scorer = EnglishScorer::new(&reference);
//! let config = DecoderConfig::default()
//!     .with_message_length(11)
//!     .with_diversity_threshold(3);
//!
//! let scanner = WindowScanner::new(&scorer, &reference, config);
//! let report = scanner.scan(&Signal::new("XYZ ABC XYZ"), &NoProgress);
//! println!("Best window: {:?}", report.best.map(|b| b.position));
//! ```

// Core domain types
pub mod core;

// Cryptanalysis engine
pub mod solver;

// English reference tables
pub mod reference;

// Decoder configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
