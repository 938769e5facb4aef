//! Wordle Heuristic Solver
//!
//! A Wordle solver that builds each guess one letter at a time from the most
//! frequent letters at every position among the words still possible.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_heuristic::core::{Outcome, Word};
//! use wordle_heuristic::solver::Solver;
//! use wordle_heuristic::wordlists::dictionary_words;
//!
//! let dictionary = dictionary_words();
//! let mut solver = Solver::new(&dictionary);
//!
//! let guess = solver.next_guess().unwrap();
//! let outcome = Outcome::parse("BYBBG").unwrap();
//! solver.apply_feedback(&guess, outcome);
//! println!("{} candidates left", solver.count_candidates());
//! ```

// Core domain types
pub mod core;

// Error type shared by the solver and commands
pub mod error;

// Candidate pool, ranking and guess construction
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and result log
pub mod output;

pub use error::SolverError;
