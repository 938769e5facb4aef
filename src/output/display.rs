//! Display functions for command results

use super::formatters::{create_progress_bar, format_letters};
use crate::commands::{SimulationReport, SolveResult};
use colored::Colorize;
use std::io::{self, Write};

/// Write the result of solving a word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_solve_result<W: Write>(
    out: &mut W,
    result: &SolveResult,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.guesses.iter().enumerate() {
        writeln!(
            out,
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.outcome.to_emoji()
        )?;

        if verbose {
            writeln!(
                out,
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            )?;
            writeln!(out, "  Known:      {}", format_letters(&step.known).green())?;
            writeln!(out, "  Excluded:   {}", format_letters(&step.excluded).red())?;
        }
    }

    writeln!(out)?;
    if result.success {
        writeln!(
            out,
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        )
    } else {
        writeln!(
            out,
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        )
    }
}

/// Write the statistics of a simulation run
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_simulation_report<W: Write>(out: &mut W, report: &SimulationReport) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "SIMULATION RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    let total = report.total_words.max(1) as f64;

    writeln!(out, "\n📊 {}", "Performance:".bright_cyan().bold())?;
    writeln!(out, "   Words simulated:  {}", report.total_words)?;
    writeln!(
        out,
        "   Solved:           {} ({:.1}%)",
        report.solved,
        report.solved as f64 / total * 100.0
    )?;
    writeln!(
        out,
        "   Average guesses:  {}",
        format!("{:.2}", report.average_guesses)
            .bright_yellow()
            .bold()
    )?;
    writeln!(out, "   Time taken:       {:.2}s", report.total_time.as_secs_f64())?;

    if !report.guess_distribution.is_empty() {
        writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
        for (&turns, &count) in &report.guess_distribution {
            let pct = count as f64 / total * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            writeln!(out, "   {turns:2}: {} {count:4} ({pct:5.1}%)", bar.green())?;
        }
    }

    if !report.hardest_words.is_empty() {
        writeln!(out, "\n🔥 {}", "Hardest words:".bright_cyan().bold())?;
        for (word, turns) in &report.hardest_words {
            writeln!(out, "   {} ({turns})", word.to_uppercase())?;
        }
    }

    if !report.exhausted.is_empty() {
        writeln!(
            out,
            "\n{} {}",
            "Out of guesses:".yellow().bold(),
            report.exhausted.join(", ")
        )?;
    }

    for (word, err) in &report.aborted {
        writeln!(out, "{} {}: {err}", "✗".red(), word.to_uppercase())?;
    }

    if let Some(path) = &report.results_path {
        writeln!(
            out,
            "\nLogged {} solved word(s) to {}",
            report.logged,
            path.display()
        )?;
    }

    Ok(())
}
