//! Sliding-window scan over the signal
//!
//! Every start position runs independently (diversity gate → initial mapping
//! → hill climbing) on the rayon pool. Each worker keeps only its running
//! best; partial results merge by score with the lower position winning
//! ties, so the earliest position wins no matter which worker finished
//! first. Only the winning window is decrypted.

use super::initializer::MappingInitializer;
use super::refiner::{HillClimber, Refinement};
use super::scorer::Fitness;
use crate::config::DecoderConfig;
use crate::core::{Mapping, Signal, distinct_letters};
use crate::reference::ReferenceData;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Receives one notification per visited position
///
/// Called from rayon workers, in no particular order.
pub trait ScanProgress: Sync {
    fn on_position(&self, position: usize);
}

/// Progress sink that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ScanProgress for NoProgress {
    fn on_position(&self, _position: usize) {}
}

impl ScanProgress for indicatif::ProgressBar {
    fn on_position(&self, _position: usize) {
        self.inc(1);
    }
}

/// Full pipeline result for one window
#[derive(Debug, Clone)]
pub struct WindowAnalysis {
    pub initial: Mapping,
    pub initial_score: f64,
    pub refined: Refinement,
}

/// The decryption of one scored window
#[derive(Debug, Clone)]
pub struct WindowOutcome {
    pub position: usize,
    pub score: f64,
    pub decrypted: String,
    pub mapping: Mapping,
}

/// A scored window before decryption
#[derive(Debug, Clone)]
struct Candidate {
    position: usize,
    score: f64,
    mapping: Mapping,
}

impl Candidate {
    /// Higher score wins; equal scores go to the lower position
    fn outranks(&self, other: &Self) -> bool {
        match self.score.partial_cmp(&other.score) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.position < other.position,
            _ => false,
        }
    }
}

/// What happened at a single position
#[derive(Debug, Clone)]
enum PositionResult {
    /// Not started because an early-termination cap was hit
    NotVisited,
    /// Too few distinct letters to analyze
    Skipped,
    Scored(Candidate),
}

/// Running counts and best candidate of one rayon fold
#[derive(Debug, Default)]
struct ScanTally {
    visited: usize,
    skipped: usize,
    scored: usize,
    best: Option<Candidate>,
}

impl ScanTally {
    fn record(mut self, result: PositionResult) -> Self {
        match result {
            PositionResult::NotVisited => {}
            PositionResult::Skipped => {
                self.visited += 1;
                self.skipped += 1;
            }
            PositionResult::Scored(candidate) => {
                self.visited += 1;
                self.scored += 1;
                self.best = Self::better(self.best, Some(candidate));
            }
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            visited: self.visited + other.visited,
            skipped: self.skipped + other.skipped,
            scored: self.scored + other.scored,
            best: Self::better(self.best, other.best),
        }
    }

    fn better(a: Option<Candidate>, b: Option<Candidate>) -> Option<Candidate> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if b.outranks(&a) { b } else { a }),
            (a, b) => a.or(b),
        }
    }
}

/// Result of a whole scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub best: Option<WindowOutcome>,
    /// Start positions available in the signal (`N - L + 1`, or 0)
    pub positions_total: usize,
    pub positions_visited: usize,
    /// Visited positions rejected by the diversity gate
    pub positions_skipped: usize,
    pub positions_scored: usize,
    /// True when a position or time cap stopped the scan early
    pub truncated: bool,
    pub duration: Duration,
}

/// Drives the per-window pipeline across all start positions
pub struct WindowScanner<'a, F: Fitness> {
    fitness: &'a F,
    initializer: MappingInitializer<'a>,
    climber: HillClimber,
    config: DecoderConfig,
}

impl<'a, F: Fitness> WindowScanner<'a, F> {
    /// Create a scanner with the default initializer pipeline
    #[must_use]
    pub fn new(fitness: &'a F, reference: &'a ReferenceData, config: DecoderConfig) -> Self {
        Self::with_initializer(fitness, MappingInitializer::new(reference), config)
    }

    #[must_use]
    pub const fn with_initializer(
        fitness: &'a F,
        initializer: MappingInitializer<'a>,
        config: DecoderConfig,
    ) -> Self {
        Self {
            fitness,
            initializer,
            climber: HillClimber::new(config.rounds),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Initialize and refine a mapping for one window
    ///
    /// Does not apply the diversity gate.
    #[must_use]
    pub fn analyze_window(&self, window: &str) -> WindowAnalysis {
        let initial = self.initializer.initial_mapping(window);
        let refined = self.climber.refine(window, &initial, self.fitness);

        WindowAnalysis {
            initial,
            initial_score: refined.initial_score,
            refined,
        }
    }

    /// Check the diversity gate for a window
    #[must_use]
    pub fn is_eligible(&self, window: &str) -> bool {
        distinct_letters(window) >= self.config.diversity_threshold
    }

    fn evaluate(&self, signal: &Signal, position: usize) -> PositionResult {
        let Some(window) = signal.window(position, self.config.message_length) else {
            return PositionResult::NotVisited;
        };

        if !self.is_eligible(&window) {
            return PositionResult::Skipped;
        }

        let initial = self.initializer.initial_mapping(&window);
        let Refinement { mapping, score, .. } = self.climber.refine(&window, &initial, self.fitness);

        PositionResult::Scored(Candidate {
            position,
            score,
            mapping,
        })
    }

    /// Scan every start position of `signal`
    ///
    /// Returns a report whose `best` is `None` when no window passed the
    /// diversity gate or the signal is shorter than the message length.
    #[must_use]
    pub fn scan<P: ScanProgress + ?Sized>(&self, signal: &Signal, progress: &P) -> ScanReport {
        let start = Instant::now();
        let positions_total = signal.window_count(self.config.message_length);
        let limit = self
            .config
            .max_positions
            .map_or(positions_total, |cap| cap.min(positions_total));

        info!(
            positions = positions_total,
            message_length = self.config.message_length,
            "Scanning {positions_total} possible positions"
        );

        let tally = (0..limit)
            .into_par_iter()
            .map(|position| {
                if let Some(time_limit) = self.config.time_limit
                    && start.elapsed() >= time_limit
                {
                    return PositionResult::NotVisited;
                }

                let result = self.evaluate(signal, position);
                progress.on_position(position);

                let every = self.config.progress_every;
                if every > 0 && position % every == 0 {
                    debug!("Position {position}/{positions_total}");
                }
                result
            })
            .fold(ScanTally::default, ScanTally::record)
            .reduce(ScanTally::default, ScanTally::merge);

        let best = tally.best.and_then(|candidate| {
            let window = signal.window(candidate.position, self.config.message_length)?;
            debug!(
                "Best window at position {}: score {:.1}",
                candidate.position, candidate.score
            );
            Some(WindowOutcome {
                position: candidate.position,
                score: candidate.score,
                decrypted: candidate.mapping.apply(&window),
                mapping: candidate.mapping,
            })
        });
        let duration = start.elapsed();

        info!(
            visited = tally.visited,
            skipped = tally.skipped,
            scored = tally.scored,
            "Scan finished in {:.2}s",
            duration.as_secs_f64()
        );

        ScanReport {
            best,
            positions_total,
            positions_visited: tally.visited,
            positions_skipped: tally.skipped,
            positions_scored: tally.scored,
            truncated: tally.visited < positions_total,
            duration,
        }
    }
}

/// Fold outcomes in the given order, keeping the first strictly better score
///
/// Sequential counterpart of the scan's reduction: fed outcomes in ascending
/// position order it picks the same winner.
#[must_use]
pub fn select_best<I>(outcomes: I) -> Option<WindowOutcome>
where
    I: IntoIterator<Item = WindowOutcome>,
{
    let mut best: Option<WindowOutcome> = None;

    for outcome in outcomes {
        if best.as_ref().is_none_or(|b| outcome.score > b.score) {
            debug!(
                "New best at position {}: score {:.1}",
                outcome.position, outcome.score
            );
            best = Some(outcome);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EnglishScorer, UNSCOREABLE};
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    struct ConstantScorer(f64);

    impl Fitness for ConstantScorer {
        fn score(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn outcome(position: usize, score: f64) -> WindowOutcome {
        WindowOutcome {
            position,
            score,
            decrypted: String::new(),
            mapping: Mapping::new(),
        }
    }

    /// Counts every scoring call
    #[derive(Default)]
    struct CountingScorer {
        calls: AtomicUsize,
    }

    impl Fitness for CountingScorer {
        fn score(&self, _text: &str) -> f64 {
            self.calls.fetch_add(1, AtomicOrdering::Relaxed);
            0.0
        }
    }

    fn candidate(position: usize, score: f64) -> Candidate {
        Candidate {
            position,
            score,
            mapping: Mapping::new(),
        }
    }

    fn tally_of(candidates: &[(usize, f64)]) -> ScanTally {
        candidates
            .iter()
            .map(|&(position, score)| PositionResult::Scored(candidate(position, score)))
            .fold(ScanTally::default(), ScanTally::record)
    }

    #[test]
    fn merge_prefers_lower_position_on_equal_scores() {
        let late = tally_of(&[(9, 7.0), (12, 3.0)]);
        let early = tally_of(&[(4, 7.0), (2, 1.0)]);

        let forward = tally_of(&[(9, 7.0), (12, 3.0)]).merge(tally_of(&[(4, 7.0), (2, 1.0)]));
        let backward = early.merge(late);

        for merged in [forward, backward] {
            assert_eq!(merged.scored, 4);
            assert_eq!(merged.visited, 4);
            let best = merged.best.unwrap();
            assert_eq!(best.position, 4);
            assert!((best.score - 7.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn merge_prefers_higher_score_over_position() {
        let merged = tally_of(&[(1, 2.0)]).merge(tally_of(&[(30, 2.5)]));
        assert_eq!(merged.best.unwrap().position, 30);

        let empty = ScanTally::default().merge(ScanTally::default());
        assert!(empty.best.is_none());
        assert_eq!(empty.visited, 0);
    }

    #[test]
    fn skipped_positions_are_counted_not_kept() {
        let tally = [PositionResult::Skipped, PositionResult::NotVisited]
            .into_iter()
            .fold(ScanTally::default(), ScanTally::record);
        assert_eq!(tally.visited, 1);
        assert_eq!(tally.skipped, 1);
        assert!(tally.best.is_none());
    }

    #[test]
    fn initial_mapping_scored_once_per_window() {
        let reference = ReferenceData::embedded();
        let scorer = CountingScorer::default();
        let scanner = WindowScanner::new(&scorer, &reference, DecoderConfig::default());

        // Three symbols: one initial score plus a three-pair neighborhood, then a fixed point
        let analysis = scanner.analyze_window("XYZ");
        assert_eq!(analysis.refined.rounds_run, 1);
        assert_eq!(scorer.calls.load(AtomicOrdering::Relaxed), 1 + 3);
        assert!((analysis.initial_score - analysis.refined.initial_score).abs() < f64::EPSILON);
    }

    #[test]
    fn select_best_keeps_earliest_tie() {
        let best = select_best(vec![outcome(0, 5.0), outcome(1, 7.0), outcome(2, 7.0)]).unwrap();
        assert_eq!(best.position, 1);
    }

    #[test]
    fn select_best_accepts_sentinel_scores() {
        let best = select_best(vec![outcome(3, UNSCOREABLE)]).unwrap();
        assert_eq!(best.position, 3);
        assert!(select_best(Vec::new()).is_none());
    }

    #[test]
    fn whole_signal_scenario() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);
        let config = DecoderConfig::default()
            .with_message_length(11)
            .with_diversity_threshold(3);
        let scanner = WindowScanner::new(&scorer, &reference, config);

        let report = scanner.scan(&Signal::new("XYZ ABC XYZ"), &NoProgress);
        assert_eq!(report.positions_total, 1);
        assert_eq!(report.positions_visited, 1);
        assert_eq!(report.positions_scored, 1);
        assert!(!report.truncated);

        let best = report.best.unwrap();
        assert_eq!(best.position, 0);
        assert!(best.score > UNSCOREABLE);
        assert_eq!(best.decrypted.len(), 11);
    }

    #[test]
    fn initial_mapping_for_scenario_assigns_e() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);
        let scanner = WindowScanner::new(&scorer, &reference, DecoderConfig::default());

        let analysis = scanner.analyze_window("XYZ ABC XYZ");
        assert_eq!(analysis.initial.get('X'), Some('E'));
        assert!(analysis.refined.score >= analysis.initial_score);
    }

    #[test]
    fn signal_shorter_than_message() {
        let reference = ReferenceData::embedded();
        let scorer = EnglishScorer::new(&reference);
        let scanner = WindowScanner::new(&scorer, &reference, DecoderConfig::default());

        let report = scanner.scan(&Signal::new("TOO SHORT"), &NoProgress);
        assert_eq!(report.positions_total, 0);
        assert_eq!(report.positions_visited, 0);
        assert!(report.best.is_none());
        assert!(!report.truncated);
    }

    #[test]
    fn constant_scores_pick_first_eligible_window() {
        let reference = ReferenceData::embedded();
        let scorer = ConstantScorer(1.0);
        let config = DecoderConfig::default()
            .with_message_length(5)
            .with_diversity_threshold(5);
        let scanner = WindowScanner::new(&scorer, &reference, config);

        // Windows 0 and 1 have 3 and 4 distinct letters
        let report = scanner.scan(&Signal::new("AAABCDEFGH"), &NoProgress);
        assert_eq!(report.positions_visited, 6);
        assert_eq!(report.positions_skipped, 2);
        assert_eq!(report.best.unwrap().position, 2);
    }

    #[test]
    fn max_positions_truncates() {
        let reference = ReferenceData::embedded();
        let scorer = ConstantScorer(1.0);
        let config = DecoderConfig::default()
            .with_message_length(3)
            .with_diversity_threshold(1)
            .with_max_positions(Some(4));
        let scanner = WindowScanner::new(&scorer, &reference, config);

        let report = scanner.scan(&Signal::new("ABCDEFGHIJ"), &NoProgress);
        assert_eq!(report.positions_total, 8);
        assert_eq!(report.positions_visited, 4);
        assert!(report.truncated);
    }

    #[test]
    fn expired_time_limit_visits_nothing() {
        let reference = ReferenceData::embedded();
        let scorer = ConstantScorer(1.0);
        let config = DecoderConfig::default()
            .with_message_length(3)
            .with_diversity_threshold(1)
            .with_time_limit(Some(Duration::ZERO));
        let scanner = WindowScanner::new(&scorer, &reference, config);

        let report = scanner.scan(&Signal::new("ABCDEFGHIJ"), &NoProgress);
        assert_eq!(report.positions_visited, 0);
        assert!(report.best.is_none());
        assert!(report.truncated);
    }
}
