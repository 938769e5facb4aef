//! Greedy frequency-first guess construction
//!
//! The guess is assembled one position at a time. At each position the ranked
//! letters are tried in order and the first one whose prefix still matches a
//! pool word is committed. Committed positions are never revisited.

use super::{WordPool, rank};
use crate::core::{WORD_LENGTH, Word};
use crate::error::SolverError;

/// Build the next guess from the current pool
///
/// Every prefix of the returned word matches a pool member, so the word itself
/// is always in the pool. The same pool always produces the same word.
///
/// # Errors
/// - `SolverError::PoolExhausted` if the pool is empty
/// - `SolverError::RankOutOfRange` if no ranked letter extends the prefix at some
///   position (only reachable with a malformed pool)
///
/// # Examples
/// ```
/// use wordle_heuristic::solver::{WordPool, build_guess};
/// use wordle_heuristic::wordlists::loader::words_from_slice;
///
/// let pool = WordPool::from_dictionary(&words_from_slice(&["apple", "angle", "ankle"]));
/// assert_eq!(build_guess(&pool).unwrap().text(), "angle");
/// ```
pub fn build_guess(pool: &WordPool) -> Result<Word, SolverError> {
    if pool.is_empty() {
        return Err(SolverError::PoolExhausted);
    }

    let mut prefix = String::with_capacity(WORD_LENGTH);

    for position in 0..WORD_LENGTH {
        let ranked = rank(pool, position);
        let mut committed = false;

        for &letter in &ranked {
            prefix.push(char::from(letter));
            if pool.has_prefix(&prefix) {
                committed = true;
                break;
            }
            prefix.pop();
        }

        if !committed {
            return Err(SolverError::RankOutOfRange {
                position,
                rank: ranked.len() + 1,
                available: ranked.len(),
            });
        }
    }

    Ok(Word::new(prefix)?)
}
