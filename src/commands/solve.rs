//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Outcome, Word};
use crate::error::SolverError;
use crate::solver::{INTERACTIVE_MAX_TURNS, Session, SessionConfig, SessionStatus};
use std::collections::BTreeSet;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: INTERACTIVE_MAX_TURNS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub outcome: Outcome,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub known: BTreeSet<u8>,
    pub excluded: BTreeSet<u8>,
}

/// Solve a specific word against the given dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the dictionary
/// - The pool runs out of candidates before the target is found
pub fn solve_word(config: SolveConfig, dictionary: &[Word]) -> Result<SolveResult, SolverError> {
    let target = Word::new(&config.target)?;
    let mut session = Session::new(dictionary, SessionConfig::new(config.max_guesses));

    if !session.solver().pool().contains(target.text()) {
        return Err(SolverError::UnknownWord(target.text().to_string()));
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    while session.status() == SessionStatus::InProgress {
        let candidates_before = session.count_candidates();
        let guess = session.suggest()?;
        let outcome = Outcome::calculate(&guess, &target);
        let word = guess.text().to_string();

        session.record(guess, outcome);

        let constraints = session.solver().constraints();
        guesses.push(GuessStep {
            word,
            outcome,
            candidates_before,
            candidates_after: session.count_candidates(),
            known: constraints.known().clone(),
            excluded: constraints.excluded().clone(),
        });
    }

    Ok(SolveResult {
        success: session.status() == SessionStatus::Solved,
        guesses,
        target: target.text().to_string(),
    })
}
