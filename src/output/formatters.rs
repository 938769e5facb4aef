//! Formatting utilities for terminal output and the result log

use crate::solver::SolveRecord;
use std::collections::BTreeSet;

/// Format one solved answer as a result log entry
///
/// ```text
/// The word was ZEBRA which was solved in 2 guess(es)
/// ['bread', 'zebra']
/// ```
#[must_use]
pub fn format_log_entry(record: &SolveRecord) -> String {
    let guesses: Vec<String> = record
        .guesses
        .iter()
        .map(|guess| format!("'{guess}'"))
        .collect();

    format!(
        "The word was {} which was solved in {} guess(es)\n[{}]\n",
        record.answer.text().to_uppercase(),
        record.turns(),
        guesses.join(", ")
    )
}

/// Render a letter set as uppercase letters, e.g. "AEL"
#[must_use]
pub fn format_letters(letters: &BTreeSet<u8>) -> String {
    letters
        .iter()
        .map(|&letter| char::from(letter.to_ascii_uppercase()))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
