//! Command implementations

pub mod check;
pub mod simple;
pub mod solve;

pub use check::{CheckResult, check_word};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_board};
