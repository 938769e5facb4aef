//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types. All types here are pure
//! values with no solver state attached.

mod outcome;
mod word;

pub use outcome::{Feedback, Outcome};
pub use word::{Word, WordError};

/// Every word the solver handles has exactly this many letters
pub const WORD_LENGTH: usize = 5;
