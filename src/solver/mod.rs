//! Cryptanalysis engine
//!
//! Scoring, mapping initialization, hill-climbing refinement and the
//! sliding-window scan that ties them together.

pub mod extract;
pub mod initializer;
pub mod refiner;
pub mod scanner;
pub mod scorer;

pub use extract::{ANSWER_WORD_COUNT, MessageStats, extract_first_nine, first_words};
pub use initializer::{MappingInitializer, SeedStrategy, TokenProfile};
pub use refiner::{DEFAULT_ROUNDS, HillClimber, Refinement};
pub use scanner::{
    NoProgress, ScanProgress, ScanReport, WindowAnalysis, WindowOutcome, WindowScanner,
    select_best,
};
pub use scorer::{EnglishScorer, Fitness, UNSCOREABLE};
