//! Simulate the solver against every dictionary word
//!
//! Each answer is solved as its own session with fresh state. Sessions run in
//! parallel; results are gathered in dictionary order before anything is
//! written, so the log and the statistics do not depend on scheduling.

use crate::core::Word;
use crate::error::SolverError;
use crate::output::ResultLog;
use crate::solver::{Session, SessionConfig, SolveRecord};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Default location of the result log
pub const DEFAULT_RESULTS_PATH: &str = "results.txt";

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub session: SessionConfig,
    /// Only simulate the first N answers
    pub limit: Option<usize>,
    /// Simulate a random sample of N answers (applied before `limit`)
    pub sample: Option<usize>,
    pub seed: u64,
    /// Where to append solved answers; `None` disables the log
    pub results_path: Option<PathBuf>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: SessionConfig::simulation(),
            limit: None,
            sample: None,
            seed: 0,
            results_path: Some(PathBuf::from(DEFAULT_RESULTS_PATH)),
            show_progress: true,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics from simulating a set of answers
#[derive(Debug)]
pub struct SimulationReport {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: Vec<String>,
    /// Answers whose session failed with an error, with the error message
    pub aborted: Vec<(String, String)>,
    /// Turns across every completed session, unsolved ones included
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub hardest_words: Vec<(String, usize)>,
    pub logged: usize,
    pub results_path: Option<PathBuf>,
    pub total_time: Duration,
}

/// Pick the answers a run will simulate
#[must_use]
pub fn select_answers(dictionary: &[Word], config: &SimulationConfig) -> Vec<Word> {
    let mut answers = dictionary.to_vec();

    if let Some(sample) = config.sample {
        let mut rng = StdRng::seed_from_u64(config.seed);
        answers.shuffle(&mut rng);
        answers.truncate(sample);
    }

    if let Some(limit) = config.limit {
        answers.truncate(limit);
    }

    answers
}

/// Solve every selected answer and append the solved ones to the result log
///
/// A session that fails is recorded as aborted and the run continues.
///
/// # Errors
///
/// Returns an error if the result log cannot be written.
pub fn run_simulation(
    dictionary: &[Word],
    config: &SimulationConfig,
) -> Result<SimulationReport, SolverError> {
    let answers = select_answers(dictionary, config);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed_precise}",
            )
            .map_or_else(|_| ProgressStyle::default_bar(), |style| {
                style.progress_chars("█▓▒░")
            }),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<Result<SolveRecord, SolverError>> = answers
        .par_iter()
        .map(|answer| {
            let result = Session::new(dictionary, config.session).solve(answer);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    let total_time = start.elapsed();

    let mut records = Vec::with_capacity(results.len());
    let mut aborted = Vec::new();
    for (answer, result) in answers.iter().zip(results) {
        match result {
            Ok(record) => records.push(record),
            Err(err) => aborted.push((answer.text().to_string(), err.to_string())),
        }
    }

    let logged = match &config.results_path {
        Some(path) => ResultLog::new(path).append(records.iter().filter(|r| r.solved))?,
        None => 0,
    };

    let mut report = summarize(&records, answers.len(), total_time);
    report.aborted = aborted;
    report.logged = logged;
    report.results_path.clone_from(&config.results_path);
    Ok(report)
}

fn summarize(records: &[SolveRecord], total_words: usize, total_time: Duration) -> SimulationReport {
    let solved: Vec<&SolveRecord> = records.iter().filter(|r| r.solved).collect();

    let exhausted = records
        .iter()
        .filter(|r| !r.solved)
        .map(|r| r.answer.text().to_string())
        .collect();

    let total_guesses: usize = records.iter().map(SolveRecord::turns).sum();
    let average_guesses = if records.is_empty() {
        0.0
    } else {
        total_guesses as f64 / records.len() as f64
    };

    let mut guess_distribution = BTreeMap::new();
    for record in &solved {
        *guess_distribution.entry(record.turns()).or_insert(0) += 1;
    }

    let mut hardest_words: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.answer.text().to_string(), r.turns()))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(10);

    SimulationReport {
        total_words,
        solved: solved.len(),
        exhausted,
        aborted: Vec::new(),
        total_guesses,
        average_guesses,
        guess_distribution,
        hardest_words,
        logged: 0,
        results_path: None,
        total_time,
    }
}
