//! Word list loading utilities
//!
//! Dictionaries may contain words of any length; only valid five-letter words
//! are kept, lowercased and de-duplicated in first-seen order.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary words from a newline-separated file
///
/// Blank lines, words of other lengths and non-alphabetic entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_heuristic::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    Ok(words_from_slice(&lines))
}

/// Convert raw dictionary entries to five-letter Words
///
/// # Examples
/// ```
/// use wordle_heuristic::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "an", "Apple", "bananas"]);
/// assert_eq!(words.len(), 1);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    slice
        .iter()
        .filter_map(|&s| Word::new(s).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
