//! Turn-by-turn session control
//!
//! A session moves through `INIT → (GUESS → FEEDBACK → CONSTRAIN)* → SOLVED |
//! EXHAUSTED`, and [`Session::reset`] brings it back to `INIT`.

use super::Solver;
use crate::core::{Outcome, Word};
use crate::error::SolverError;

/// Turn budget when a person supplies the feedback
pub const INTERACTIVE_MAX_TURNS: usize = 6;

/// Turn budget for batch simulation, large enough to see words that need more than six
pub const SIMULATION_MAX_TURNS: usize = 10;

/// Configuration for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_turns: usize,
}

impl SessionConfig {
    /// A budget of zero is raised to one turn.
    #[must_use]
    pub const fn new(max_turns: usize) -> Self {
        let max_turns = if max_turns == 0 { 1 } else { max_turns };
        Self { max_turns }
    }

    #[must_use]
    pub const fn interactive() -> Self {
        Self::new(INTERACTIVE_MAX_TURNS)
    }

    #[must_use]
    pub const fn simulation() -> Self {
        Self::new(SIMULATION_MAX_TURNS)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::interactive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Solved,
    Exhausted,
}

/// Result of solving a known answer
#[derive(Debug, Clone)]
pub struct SolveRecord {
    pub answer: Word,
    pub guesses: Vec<Word>,
    pub outcomes: Vec<Outcome>,
    pub solved: bool,
}

impl SolveRecord {
    /// Number of turns used
    #[must_use]
    pub fn turns(&self) -> usize {
        self.guesses.len()
    }
}

/// One game against a hidden answer
#[derive(Debug, Clone)]
pub struct Session<'a> {
    solver: Solver<'a>,
    config: SessionConfig,
    history: Vec<(Word, Outcome)>,
    status: SessionStatus,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [Word], config: SessionConfig) -> Self {
        Self {
            solver: Solver::new(dictionary),
            config,
            history: Vec::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Suggest the guess for the current turn
    ///
    /// # Errors
    /// Returns `SolverError::PoolExhausted` if the feedback so far rules out
    /// every word.
    pub fn suggest(&self) -> Result<Word, SolverError> {
        self.solver.next_guess()
    }

    /// Record the feedback for `guess` and advance the session
    ///
    /// A solved outcome ends the session immediately regardless of the turn
    /// number; otherwise the pool is narrowed and the session is exhausted once
    /// the turn budget is spent. A finished session ignores further feedback
    /// until [`Session::reset`].
    pub fn record(&mut self, guess: Word, outcome: Outcome) -> SessionStatus {
        if self.status != SessionStatus::InProgress {
            return self.status;
        }

        if outcome.is_solved() {
            self.history.push((guess, outcome));
            self.status = SessionStatus::Solved;
            return self.status;
        }

        self.solver.apply_feedback(&guess, outcome);
        self.history.push((guess, outcome));

        if self.history.len() >= self.config.max_turns {
            self.status = SessionStatus::Exhausted;
        }
        self.status
    }

    /// Play a full session against a known answer using the simulator judge
    ///
    /// The session is reset first, so a `Session` can be reused for many answers.
    ///
    /// # Errors
    /// Returns `SolverError::UnknownWord` if the answer is not in the dictionary
    /// and `SolverError::PoolExhausted` if the pool empties before solving.
    pub fn solve(&mut self, answer: &Word) -> Result<SolveRecord, SolverError> {
        self.reset();

        if !self.solver.pool().contains(answer.text()) {
            return Err(SolverError::UnknownWord(answer.text().to_string()));
        }

        while self.status == SessionStatus::InProgress {
            let guess = self.suggest()?;
            let outcome = Outcome::calculate(&guess, answer);
            self.record(guess, outcome);
        }

        let (guesses, outcomes): (Vec<Word>, Vec<Outcome>) = self.history.iter().cloned().unzip();
        Ok(SolveRecord {
            answer: answer.clone(),
            guesses,
            outcomes,
            solved: self.status == SessionStatus::Solved,
        })
    }

    /// Return to the initial state with the whole dictionary as candidates
    pub fn reset(&mut self) {
        self.solver.reset();
        self.history.clear();
        self.status = SessionStatus::InProgress;
    }

    /// The 1-based number of the turn about to be played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Outcome)] {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub const fn solver(&self) -> &Solver<'a> {
        &self.solver
    }

    #[must_use]
    pub fn count_candidates(&self) -> usize {
        self.solver.count_candidates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&[
            "there", "their", "three", "other", "those", "these", "theme", "thick",
        ])
    }

    #[test]
    fn config_presets() {
        assert_eq!(SessionConfig::interactive().max_turns, 6);
        assert_eq!(SessionConfig::simulation().max_turns, 10);
        assert_eq!(SessionConfig::default(), SessionConfig::interactive());
    }

    #[test]
    fn solved_outcome_ends_session_on_any_turn() {
        let words = dictionary();
        let mut session = Session::new(&words, SessionConfig::interactive());

        let answer = Word::new("their").unwrap();
        let first = session.suggest().unwrap();
        let outcome = Outcome::calculate(&first, &answer);
        assert_eq!(session.record(first, outcome), SessionStatus::InProgress);

        let second = session.suggest().unwrap();
        assert_eq!(
            session.record(second, Outcome::parse("GGGGG").unwrap()),
            SessionStatus::Solved
        );
        assert_eq!(session.turn(), 3);
    }

    #[test]
    fn turn_budget_exhausts_session() {
        let words = dictionary();
        let mut session = Session::new(&words, SessionConfig::new(1));

        let guess = session.suggest().unwrap();
        let status = session.record(guess, Outcome::parse("GGGYY").unwrap());

        assert_eq!(status, SessionStatus::Exhausted);
    }

    #[test]
    fn finished_session_ignores_feedback() {
        let words = dictionary();
        let mut session = Session::new(&words, SessionConfig::interactive());

        let guess = session.suggest().unwrap();
        session.record(guess.clone(), Outcome::SOLVED);
        let candidates = session.count_candidates();

        let status = session.record(guess, Outcome::parse("BBBBB").unwrap());

        assert_eq!(status, SessionStatus::Solved);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.count_candidates(), candidates);
        assert_eq!(session.turn(), 2);
    }

    #[test]
    fn exhausted_session_ignores_feedback() {
        let words = dictionary();
        let mut session = Session::new(&words, SessionConfig::new(1));

        let guess = session.suggest().unwrap();
        session.record(guess.clone(), Outcome::parse("GGGYY").unwrap());
        let candidates = session.count_candidates();

        assert_eq!(
            session.record(guess, Outcome::SOLVED),
            SessionStatus::Exhausted
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.count_candidates(), candidates);
    }

    #[test]
    fn zero_turn_budget_is_one_turn() {
        assert_eq!(SessionConfig::new(0).max_turns, 1);

        let words = dictionary();
        let answer = Word::new("those").unwrap();
        let record = Session::new(&words, SessionConfig::new(0))
            .solve(&answer)
            .unwrap();

        assert_eq!(record.turns(), 1);
    }

    #[test]
    fn solve_every_answer_keeps_answer_in_pool() {
        let words = dictionary();
        let mut session = Session::new(&words, SessionConfig::simulation());

        for answer in &words {
            let record = session.solve(answer).unwrap();
            assert!(record.solved, "failed to solve {answer}");
            assert_eq!(record.guesses.last(), Some(answer));
            assert_eq!(record.turns(), record.outcomes.len());
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let words = dictionary();
        let answer = Word::new("their").unwrap();

        let first = Session::new(&words, SessionConfig::simulation())
            .solve(&answer)
            .unwrap();
        let second = Session::new(&words, SessionConfig::simulation())
            .solve(&answer)
            .unwrap();

        assert_eq!(first.guesses, second.guesses);
    }

    #[test]
    fn solve_unknown_answer_is_rejected() {
        let words = dictionary();
        let mut session = Session::new(&words, SessionConfig::simulation());
        let answer = Word::new("zebra").unwrap();

        assert!(matches!(
            session.solve(&answer),
            Err(SolverError::UnknownWord(_))
        ));
    }

    #[test]
    fn reset_returns_to_init() {
        let words = dictionary();
        let mut session = Session::new(&words, SessionConfig::interactive());
        let guess = session.suggest().unwrap();
        session.record(guess, Outcome::parse("BBBBB").unwrap());

        session.reset();

        assert_eq!(session.turn(), 1);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.count_candidates(), words.len());
    }
}
