//! Formatting utilities for terminal output

use crate::core::Mapping;
use indicatif::ProgressStyle;

/// Characters of decrypted text shown in previews
pub const PREVIEW_CHARS: usize = 100;

/// Format a mapping as `cipher→plain` pairs, several per line
#[must_use]
pub fn format_mapping(mapping: &Mapping, per_line: usize) -> String {
    let pairs: Vec<String> = mapping.iter().map(|(c, p)| format!("{c}→{p}")).collect();
    pairs
        .chunks(per_line.max(1))
        .map(|chunk| chunk.join("  "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// First `max_chars` characters of `text`, with an ellipsis if cut
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many of the 26 letters a window uses
#[must_use]
pub fn diversity_bar(distinct: usize, width: usize) -> String {
    create_progress_bar(distinct as f64, 26.0, width)
}

/// Style for the scan progress bar
#[must_use]
pub fn scan_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░")
}
