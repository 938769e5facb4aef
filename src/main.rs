//! Wordle Heuristic Solver - CLI
//!
//! Console front end: a menu by default, or one of the subcommands below.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use wordle_heuristic::{
    commands::{
        DEFAULT_RESULTS_PATH, SimulationConfig, SolveConfig, run_interactive, run_menu,
        run_simulation, solve_word,
    },
    core::Word,
    output::{write_simulation_report, write_solve_result},
    solver::{INTERACTIVE_MAX_TURNS, SIMULATION_MAX_TURNS, SessionConfig},
    wordlists::{dictionary_words, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_heuristic",
    about = "Wordle solver that builds guesses from per-position letter frequencies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses and read the feedback from the console
    Interactive {
        /// Guesses allowed per round
        #[arg(long, default_value_t = INTERACTIVE_MAX_TURNS, value_parser = turn_budget())]
        max_turns: usize,
    },

    /// Solve every dictionary word and log the results
    Simulate {
        /// Only simulate the first N words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Simulate a random sample of N words
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value = "0")]
        seed: u64,

        /// File the solved words are appended to
        #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
        results: PathBuf,

        /// Do not write the result log
        #[arg(long)]
        no_log: bool,

        /// Guesses allowed per word
        #[arg(long, default_value_t = SIMULATION_MAX_TURNS, value_parser = turn_budget())]
        max_turns: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and letter constraints for each turn
        #[arg(short, long)]
        verbose: bool,

        /// Guesses allowed
        #[arg(long, default_value_t = INTERACTIVE_MAX_TURNS, value_parser = turn_budget())]
        max_turns: usize,
    },
}

/// `--max-turns` must allow at least one guess
fn turn_budget() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..)
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(dictionary_words()),
        path => load_from_file(path).with_context(|| format!("failed to read word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    if dictionary.is_empty() {
        anyhow::bail!("word list '{}' contains no five-letter words", cli.wordlist);
    }

    match cli.command {
        None => run_menu_command(&dictionary),
        Some(Commands::Interactive { max_turns }) => run_interactive_command(&dictionary, max_turns),
        Some(Commands::Simulate {
            limit,
            sample,
            seed,
            results,
            no_log,
            max_turns,
        }) => {
            let config = SimulationConfig {
                session: SessionConfig::new(max_turns),
                limit,
                sample,
                seed,
                results_path: (!no_log).then_some(results),
                show_progress: true,
            };
            run_simulate_command(&dictionary, &config)
        }
        Some(Commands::Solve {
            word,
            verbose,
            max_turns,
        }) => run_solve_command(&dictionary, word, verbose, max_turns),
    }
}

fn run_menu_command(dictionary: &[Word]) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    run_menu(dictionary, &SimulationConfig::new(), &mut input, &mut output)?;
    Ok(())
}

fn run_interactive_command(dictionary: &[Word], max_turns: usize) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let summary = run_interactive(
        dictionary,
        SessionConfig::new(max_turns),
        &mut input,
        &mut output,
    )?;
    writeln!(
        output,
        "\nPlayed {} round(s), solved {}",
        summary.rounds, summary.solved
    )?;
    Ok(())
}

fn run_simulate_command(dictionary: &[Word], config: &SimulationConfig) -> Result<()> {
    println!(
        "{} {} words",
        "Simulating".bright_cyan().bold(),
        dictionary.len()
    );

    let report = run_simulation(dictionary, config).context("simulation failed")?;
    write_simulation_report(&mut io::stdout().lock(), &report)?;
    Ok(())
}

fn run_solve_command(
    dictionary: &[Word],
    word: String,
    verbose: bool,
    max_turns: usize,
) -> Result<()> {
    let mut config = SolveConfig::new(word);
    config.max_guesses = max_turns;

    let result = solve_word(config, dictionary)?;
    write_solve_result(&mut io::stdout().lock(), &result, verbose)?;
    Ok(())
}
