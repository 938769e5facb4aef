//! Top-level console menu
//!
//! Shown when the binary is started without a subcommand.

use super::interactive::{prompt, run_interactive};
use super::simulate::{SimulationConfig, run_simulation};
use crate::core::Word;
use crate::error::SolverError;
use crate::output::write_simulation_report;
use crate::solver::SessionConfig;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Offer the two modes and run the one the player picks
///
/// Returns after one mode has run, or at end of input.
///
/// # Errors
///
/// Returns an error if reading input, writing output or writing the result
/// log fails.
pub fn run_menu<R: BufRead, W: Write>(
    dictionary: &[Word],
    simulation: &SimulationConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(), SolverError> {
    writeln!(output, "{}", "-".repeat(30))?;
    writeln!(output, "1. Run solver")?;
    writeln!(output, "2. Simulate all words")?;

    let Some(choice) = prompt(input, output, "Enter Option")? else {
        return Ok(());
    };

    match choice.as_str() {
        "1" => {
            let summary =
                run_interactive(dictionary, SessionConfig::interactive(), input, output)?;
            writeln!(
                output,
                "\nPlayed {} round(s), solved {}",
                summary.rounds, summary.solved
            )?;
        }
        "2" => {
            writeln!(
                output,
                "Started simulating {} words, this may take a while",
                dictionary.len()
            )?;
            let report = run_simulation(dictionary, simulation)?;
            write_simulation_report(output, &report)?;
        }
        other => writeln!(output, "{} Unknown option '{other}'", "✗".red())?,
    }

    Ok(())
}
