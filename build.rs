//! Build script to generate embedded reference tables
//!
//! Reads the word tables under `data/` and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Dictionary used by the quality scorer
    generate_word_list(
        "data/common_words.txt",
        &Path::new(&out_dir).join("common_words.rs"),
        "COMMON_WORDS",
        "Common English words rewarded by the quality scorer",
    );

    // Short word tables used by the mapping initializer
    generate_word_list(
        "data/short_words.txt",
        &Path::new(&out_dir).join("short_words.rs"),
        "SHORT_WORDS",
        "Frequent English words of one to four letters, most likely first",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/common_words.txt");
    println!("cargo:rerun-if-changed=data/short_words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated reference table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_uppercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
