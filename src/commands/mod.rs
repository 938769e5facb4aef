//! Command implementations

pub mod interactive;
pub mod menu;
pub mod simulate;
pub mod solve;

pub use interactive::{InteractiveSummary, run_interactive};
pub use menu::run_menu;
pub use simulate::{
    DEFAULT_RESULTS_PATH, SimulationConfig, SimulationReport, run_simulation, select_answers,
};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
