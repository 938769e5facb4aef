//! Error type shared by the engine and the command layer

use crate::core::WordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    /// The word pool is empty, so no guess can be built.
    #[error("no candidate words remain; the feedback given so far is contradictory")]
    PoolExhausted,

    /// Requested rank exceeds the distinct letters seen at a position.
    #[error("rank {rank} out of range at position {position} ({available} distinct letters)")]
    RankOutOfRange {
        position: usize,
        rank: usize,
        available: usize,
    },

    /// Feedback of the wrong length or with an unknown symbol.
    #[error("invalid outcome '{0}': expected 5 symbols from G, Y, B")]
    InvalidOutcome(String),

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Target word is not part of the dictionary the session was built from.
    #[error("'{0}' is not in the dictionary")]
    UnknownWord(String),

    /// Propagated I/O error from the console or the result log.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
