//! Display functions for command results

use super::formatters::{PREVIEW_CHARS, diversity_bar, format_mapping, preview};
use crate::commands::{DecodeReport, Inspection, ScoreResult};
use colored::Colorize;
use std::path::Path;

/// Print the decoder banner
pub fn print_banner() {
    println!("{}", "═".repeat(60).cyan());
    println!(" {} ", "SUBSTITUTION SIGNAL DECODER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the notice for a missing signal file
pub fn print_missing_signal(path: &Path) {
    println!(
        "{}",
        format!("❌ Error: {} not found!", path.display()).red().bold()
    );
}

/// Print the result of decoding a signal
pub fn print_decode_report(report: &DecodeReport) {
    let scan = &report.scan;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DECRYPTION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Scan:".bright_cyan().bold());
    println!("   Signal length:    {} characters", report.signal_length);
    println!("   Message length:   {}", report.message_length);
    println!(
        "   Positions:        {} visited / {} total",
        scan.positions_visited, scan.positions_total
    );
    println!("   Low diversity:    {} skipped", scan.positions_skipped);
    println!("   Time taken:       {:.2}s", scan.duration.as_secs_f64());
    if scan.truncated {
        println!(
            "   {}",
            "Scan stopped early; result is the best found so far".yellow()
        );
    }

    let Some(best) = &scan.best else {
        println!(
            "\n{}",
            "❌ No window had enough distinct letters to analyze"
                .red()
                .bold()
        );
        return;
    };

    println!(
        "\nBest match found at position: {}",
        best.position.to_string().bright_yellow().bold()
    );
    println!(
        "Quality score: {}",
        format!("{:.1}", best.score).bright_yellow().bold()
    );

    if let Some(first_words) = &report.first_words {
        println!("\n{}", "FIRST 9 WORDS:".bright_cyan().bold());
        println!("{}", "═".repeat(50).cyan());
        println!("{}", first_words.green().bold());
        println!("{}", "═".repeat(50).cyan());
    }

    println!("\n{}", "FULL DECRYPTED MESSAGE:".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("{}", best.decrypted);

    if let Some(stats) = &report.stats {
        println!("\n{}", "MESSAGE ANALYSIS:".bright_cyan().bold());
        println!("{}", "─".repeat(40).cyan());
        println!("Total words: {}", stats.word_count);
        println!("Total characters: {}", stats.char_count);
        println!("Average word length: {:.1}", stats.average_word_length);
    }
}

/// Print the result of scoring a text
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Text:     {}", preview(&result.text, PREVIEW_CHARS));
    println!("{}", "─".repeat(60).cyan());
    println!("Tokens:           {}", result.token_count);
    println!("Dictionary hits:  {}", result.dictionary_hits);
    println!(
        "Score:            {}",
        format!("{:.1}", result.score).bright_yellow().bold()
    );
}

/// Print the pipeline details of one window
pub fn print_inspection(inspection: &Inspection) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WINDOW AT POSITION".bright_cyan().bold(),
        inspection.position.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let gate = if inspection.eligible {
        "eligible".green()
    } else {
        "below diversity threshold".red()
    };
    println!(
        "\nDistinct letters: [{}] {} ({gate})",
        diversity_bar(inspection.distinct_letters, 26).green(),
        inspection.distinct_letters
    );

    println!("\n{}", "Ciphertext:".bright_cyan().bold());
    println!("{}", preview(&inspection.window, PREVIEW_CHARS));

    println!(
        "\n{} score {:.1}",
        "Initial mapping:".bright_cyan().bold(),
        inspection.initial_score
    );
    println!("{}", format_mapping(&inspection.initial, 9));

    println!(
        "\n{} score {:.1} after {} round(s)",
        "Refined mapping:".bright_cyan().bold(),
        inspection.refined.score,
        inspection.refined.rounds_run
    );
    println!("{}", format_mapping(&inspection.refined.mapping, 9));
    if !inspection.refined.mapping.is_injective() {
        println!(
            "{}",
            "Two cipher symbols share a plaintext letter".yellow()
        );
    }

    println!("\n{}", "Decrypted:".bright_cyan().bold());
    println!("{}", preview(&inspection.decrypted, PREVIEW_CHARS));
}
