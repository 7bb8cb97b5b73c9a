//! Signal Decoder - CLI
//!
//! Scans a noisy signal for a substitution-enciphered message and prints the
//! most plausible decryption.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;
use signal_decoder::{
    commands::{decode_signal, inspect_window, score_text},
    config::{
        DEFAULT_DIVERSITY_THRESHOLD, DEFAULT_MESSAGE_LENGTH, DEFAULT_PROGRESS_EVERY,
        DEFAULT_SIGNAL_PATH, DecoderConfig,
    },
    core::Signal,
    error::DecodeError,
    output::{
        formatters::scan_progress_style, print_banner, print_decode_report, print_inspection,
        print_missing_signal, print_score_result,
    },
    reference::{ReferenceData, loader::load_from_file},
    solver::DEFAULT_ROUNDS,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{Level, info, warn};

#[derive(Parser)]
#[command(
    name = "signal_decoder",
    about = "Recovers a substitution-enciphered message hidden in a noisy signal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging (new bests, progress cadence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Custom common-word dictionary, one word per line
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the signal and print the best decryption (default)
    Decode(DecodeArgs),

    /// Score a text with the English quality heuristic
    Score {
        /// Text to score
        text: String,
    },

    /// Run the pipeline on a single window and show its mappings
    Inspect(InspectArgs),
}

#[derive(Args)]
struct WindowArgs {
    /// Path to the signal file
    #[arg(short, long, default_value = DEFAULT_SIGNAL_PATH)]
    signal: PathBuf,

    /// Length of the hidden message in characters
    #[arg(short, long, default_value_t = DEFAULT_MESSAGE_LENGTH)]
    length: usize,

    /// Hill-climbing rounds per window
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// Minimum distinct letters for a window to be analyzed
    #[arg(long, default_value_t = DEFAULT_DIVERSITY_THRESHOLD)]
    diversity: usize,
}

impl Default for WindowArgs {
    fn default() -> Self {
        Self {
            signal: PathBuf::from(DEFAULT_SIGNAL_PATH),
            length: DEFAULT_MESSAGE_LENGTH,
            rounds: DEFAULT_ROUNDS,
            diversity: DEFAULT_DIVERSITY_THRESHOLD,
        }
    }
}

impl WindowArgs {
    fn to_config(&self) -> DecoderConfig {
        DecoderConfig::default()
            .with_message_length(self.length)
            .with_rounds(self.rounds)
            .with_diversity_threshold(self.diversity)
    }
}

#[derive(Args)]
struct DecodeArgs {
    #[command(flatten)]
    window: WindowArgs,

    /// Log a progress line every N positions (0 disables)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_EVERY)]
    progress_every: usize,

    /// Visit at most N positions, starting from the beginning
    #[arg(long)]
    max_positions: Option<usize>,

    /// Stop starting new windows after this many seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Default for DecodeArgs {
    fn default() -> Self {
        Self {
            window: WindowArgs::default(),
            progress_every: DEFAULT_PROGRESS_EVERY,
            max_positions: None,
            time_limit: None,
            no_progress: false,
        }
    }
}

impl DecodeArgs {
    fn to_config(&self) -> DecoderConfig {
        let mut config = self
            .window
            .to_config()
            .with_max_positions(self.max_positions)
            .with_time_limit(self.time_limit.map(Duration::from_secs));
        config.progress_every = self.progress_every;
        config
    }
}

#[derive(Args)]
struct InspectArgs {
    /// Start position of the window
    #[arg(short, long)]
    pos: usize,

    #[command(flatten)]
    window: WindowArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let reference = load_reference(cli.dictionary.as_deref())?;

    // Default to Decode with default options if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Decode(DecodeArgs::default()));

    match command {
        Commands::Decode(args) => run_decode_command(&args, &reference, cli.verbose),
        Commands::Score { text } => {
            print_score_result(&score_text(&text, &reference));
            Ok(())
        }
        Commands::Inspect(args) => run_inspect_command(&args, &reference),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Embedded reference data, with the dictionary replaced if one is given
fn load_reference(dictionary: Option<&Path>) -> Result<ReferenceData> {
    let reference = ReferenceData::embedded();
    let Some(path) = dictionary else {
        return Ok(reference);
    };

    let words = load_from_file(path)
        .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
    info!("Loaded {} dictionary words from {}", words.len(), path.display());
    Ok(reference.with_common_words(words))
}

/// Load the signal; a missing file is reported and yields `None`
fn load_signal(path: &Path) -> Result<Option<Signal>> {
    match Signal::load(path) {
        Ok(signal) => {
            info!("Signal loaded: {} characters", signal.len());
            Ok(Some(signal))
        }
        Err(DecodeError::SignalNotFound(missing)) => {
            warn!("Signal file {} not found, nothing to decode", missing.display());
            print_missing_signal(&missing);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn run_decode_command(args: &DecodeArgs, reference: &ReferenceData, verbose: bool) -> Result<()> {
    print_banner();

    let Some(signal) = load_signal(&args.window.signal)? else {
        return Ok(());
    };

    let config = args.to_config();
    let total = signal.window_count(config.message_length);
    let positions = config.max_positions.map_or(total, |cap| cap.min(total));

    // Log lines and the bar share stderr; verbose mode keeps only the logs
    let pb = if args.no_progress || verbose {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(positions as u64);
        pb.set_style(scan_progress_style());
        pb
    };

    let report = decode_signal(&signal, &config, reference, &pb)?;
    pb.finish_and_clear();

    print_decode_report(&report);
    Ok(())
}

fn run_inspect_command(args: &InspectArgs, reference: &ReferenceData) -> Result<()> {
    let Some(signal) = load_signal(&args.window.signal)? else {
        return Ok(());
    };

    let inspection = inspect_window(&signal, args.pos, &args.window.to_config(), reference)?;
    print_inspection(&inspection);
    Ok(())
}
