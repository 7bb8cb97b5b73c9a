//! Steepest-ascent hill climbing over mappings
//!
//! The neighborhood of a mapping is every mapping obtained by exchanging the
//! plaintext letters of one unordered pair of cipher symbols. Each round
//! scores the whole neighborhood and moves to its best member if that beats
//! the current score.

use super::scorer::Fitness;
use crate::core::Mapping;

/// Default number of hill-climbing rounds
pub const DEFAULT_ROUNDS: usize = 3;

/// Outcome of refining a mapping
#[derive(Debug, Clone)]
pub struct Refinement {
    pub mapping: Mapping,
    pub score: f64,
    /// Score of the mapping the search started from
    pub initial_score: f64,
    /// Rounds actually executed (a round without improvement ends the search)
    pub rounds_run: usize,
}

/// Bounded pairwise-swap local search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HillClimber {
    rounds: usize,
}

impl Default for HillClimber {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}

impl HillClimber {
    #[must_use]
    pub const fn new(rounds: usize) -> Self {
        Self { rounds }
    }

    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Number of candidate mappings scored per round for a mapping of `symbols` entries
    #[must_use]
    pub const fn neighborhood_size(symbols: usize) -> usize {
        symbols * symbols.saturating_sub(1) / 2
    }

    /// Refine `initial` against `text`
    ///
    /// The returned score is never lower than the score of `initial`. Ties
    /// between candidates keep the pair enumerated first.
    #[must_use]
    pub fn refine<F: Fitness + ?Sized>(&self, text: &str, initial: &Mapping, fitness: &F) -> Refinement {
        let initial_score = fitness.score(&initial.apply(text));
        let mut best_mapping = initial.clone();
        let mut best_score = initial_score;
        let mut rounds_run = 0;

        for _ in 0..self.rounds {
            rounds_run += 1;
            let current = best_mapping.clone();
            let mut improved = false;

            for i in 0..current.len() {
                for j in (i + 1)..current.len() {
                    let candidate = current.swapped(i, j);
                    let score = fitness.score(&candidate.apply(text));

                    if score > best_score {
                        best_score = score;
                        best_mapping = candidate;
                        improved = true;
                    }
                }
            }

            // A round without improvement is a fixed point
            if !improved {
                break;
            }
        }

        Refinement {
            mapping: best_mapping,
            score: best_score,
            initial_score,
            rounds_run,
        }
    }
}
