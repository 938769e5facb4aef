//! Main Wordle solver interface

use super::{LetterConstraints, WordPool, build_guess};
use crate::core::{Outcome, Word};
use crate::error::SolverError;

/// Per-session solver state
///
/// Owns the word pool and the letter constraints for one session. Nothing is
/// shared between solvers, so independent sessions can run on separate threads.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    dictionary: &'a [Word],
    pool: WordPool,
    constraints: LetterConstraints,
}

impl<'a> Solver<'a> {
    /// Create a solver whose pool starts as the whole dictionary
    #[must_use]
    pub fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            pool: WordPool::from_dictionary(dictionary),
            constraints: LetterConstraints::new(),
        }
    }

    /// Build the next guess from the remaining candidates
    ///
    /// # Errors
    /// Returns `SolverError::PoolExhausted` if no candidates remain.
    pub fn next_guess(&self) -> Result<Word, SolverError> {
        build_guess(&self.pool)
    }

    /// Narrow the candidates with the feedback for `guess`
    ///
    /// Returns the number of candidates removed.
    pub fn apply_feedback(&mut self, guess: &Word, outcome: Outcome) -> usize {
        self.constraints.apply(&mut self.pool, guess, outcome)
    }

    /// Repopulate the pool from the dictionary and forget all letters
    pub fn reset(&mut self) {
        self.pool.initialize(self.dictionary);
        self.constraints.clear();
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub const fn constraints(&self) -> &LetterConstraints {
        &self.constraints
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Count how many candidates remain
    #[must_use]
    pub fn count_candidates(&self) -> usize {
        self.pool.len()
    }
}
