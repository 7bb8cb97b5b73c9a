//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_decode_report, print_inspection, print_missing_signal, print_score_result,
};
