//! Guess-narrowing engine
//!
//! Frequency ranking, prefix-checked guess construction and constraint
//! propagation over a shrinking word pool, plus the session that drives them.

mod builder;
mod constraints;
mod engine;
mod pool;
mod ranker;
pub mod session;

pub use builder::build_guess;
pub use constraints::LetterConstraints;
pub use engine::Solver;
pub use pool::WordPool;
pub use ranker::{nth, rank};
pub use session::{
    INTERACTIVE_MAX_TURNS, SIMULATION_MAX_TURNS, Session, SessionConfig, SessionStatus,
    SolveRecord,
};
