//! Interactive console mode
//!
//! The solver suggests a word, the player types the feedback they got
//! (`G` hit, `Y` present, `B` absent). Rounds repeat until the player quits
//! or input ends.

use crate::core::{Outcome, Word};
use crate::error::SolverError;
use crate::solver::{Session, SessionConfig, SessionStatus};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Tally of the rounds played in one interactive run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InteractiveSummary {
    pub rounds: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Rounds abandoned because the feedback ruled out every word
    pub contradicted: usize,
}

/// Run interactive rounds until the player quits or input ends
///
/// Malformed feedback is reported and asked for again on the same turn.
/// Feedback that leaves no candidates ends the round and starts a new one.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<R: BufRead, W: Write>(
    dictionary: &[Word],
    config: SessionConfig,
    input: &mut R,
    output: &mut W,
) -> Result<InteractiveSummary, SolverError> {
    let mut session = Session::new(dictionary, config);
    let mut summary = InteractiveSummary::default();

    writeln!(
        output,
        "Enter the feedback for each guess: G = right spot, Y = wrong spot, B = not in word."
    )?;
    writeln!(output, "Type 'quit' to exit.")?;

    loop {
        writeln!(output, "{}", "-".repeat(30))?;

        let status = loop {
            let guess = match session.suggest() {
                Ok(guess) => guess,
                Err(err @ (SolverError::PoolExhausted | SolverError::RankOutOfRange { .. })) => {
                    writeln!(output, "{} {}", "✗".red(), err)?;
                    break None;
                }
                Err(err) => return Err(err),
            };

            writeln!(
                output,
                "Guess {}: {}  ({} candidates)",
                session.turn(),
                guess.text().to_uppercase().bright_yellow().bold(),
                session.count_candidates()
            )?;

            let outcome = loop {
                let Some(line) = prompt(input, output, "Enter Outcome")? else {
                    return Ok(summary);
                };

                if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
                    return Ok(summary);
                }

                match Outcome::parse(&line) {
                    Ok(outcome) => break outcome,
                    Err(err) => writeln!(output, "{} {}", "✗".red(), err)?,
                }
            };

            match session.record(guess.clone(), outcome) {
                SessionStatus::InProgress => {}
                SessionStatus::Solved => {
                    writeln!(
                        output,
                        "The word was {} which was solved in {} guess(es)",
                        guess.text().to_uppercase().bright_green().bold(),
                        session.history().len()
                    )?;
                    break Some(SessionStatus::Solved);
                }
                SessionStatus::Exhausted => {
                    writeln!(
                        output,
                        "Out of guesses after {} turns",
                        session.history().len()
                    )?;
                    break Some(SessionStatus::Exhausted);
                }
            }
        };

        summary.rounds += 1;
        match status {
            Some(SessionStatus::Solved) => summary.solved += 1,
            Some(_) => summary.exhausted += 1,
            None => summary.contradicted += 1,
        }

        session.reset();
    }
}

/// Prompt for one line of input
///
/// Returns `None` at end of input.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
