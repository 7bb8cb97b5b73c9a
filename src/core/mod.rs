//! Core domain types for substitution cryptanalysis
//!
//! This module contains the fundamental domain types: the signal, the
//! substitution mapping and frequency ranking.
//! All types here are pure and testable; only [`Signal::load`] touches the filesystem.

mod frequency;
mod mapping;
mod signal;

pub use frequency::rank_by_frequency;
pub use mapping::{Mapping, apply_substitution};
pub use signal::{Signal, distinct_letters};
