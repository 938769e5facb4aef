//! Terminal output and the result log

pub mod display;
pub mod formatters;
mod result_log;

pub use display::{write_simulation_report, write_solve_result};
pub use result_log::ResultLog;
