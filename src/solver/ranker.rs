//! Positional letter-frequency ranking
//!
//! Rankings are computed from the pool on every call; the pool shrinks between
//! guesses, so nothing is cached.

use super::WordPool;
use crate::core::WORD_LENGTH;
use crate::error::SolverError;

/// Letters seen at `position` across the pool, most frequent first
///
/// Equally frequent letters are ordered alphabetically, so the ranking depends
/// only on the pool contents. A position past the end of the word has no
/// letters, so the ranking is empty.
///
/// # Examples
/// ```
/// use wordle_heuristic::solver::{WordPool, rank};
/// use wordle_heuristic::wordlists::loader::words_from_slice;
///
/// let pool = WordPool::from_dictionary(&words_from_slice(&["apple", "angle", "ankle"]));
/// assert_eq!(rank(&pool, 1), vec![b'n', b'p']);
/// ```
#[must_use]
pub fn rank(pool: &WordPool, position: usize) -> Vec<u8> {
    if position >= WORD_LENGTH {
        return Vec::new();
    }

    let mut counts = [0usize; 26];
    for word in pool.iter() {
        counts[usize::from(word.char_at(position) - b'a')] += 1;
    }

    let mut letters: Vec<(u8, usize)> = (b'a'..=b'z')
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .collect();
    letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    letters.into_iter().map(|(letter, _)| letter).collect()
}

/// The `n`-th ranked letter at `position` (1-indexed)
///
/// # Errors
/// Returns `SolverError::RankOutOfRange` if `n` is zero, exceeds the number of
/// distinct letters at that position, or `position` is past the end of the word.
pub fn nth(pool: &WordPool, position: usize, n: usize) -> Result<u8, SolverError> {
    let ranked = rank(pool, position);
    n.checked_sub(1)
        .and_then(|index| ranked.get(index).copied())
        .ok_or(SolverError::RankOutOfRange {
            position,
            rank: n,
            available: ranked.len(),
        })
}
