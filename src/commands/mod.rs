//! Command implementations

pub mod assist;
pub mod bench;
pub mod solve;

pub use assist::run_assist;
pub use bench::{BenchStats, run_bench};
pub use solve::{SolveOutcome, TurnRecord, solve_secret};
