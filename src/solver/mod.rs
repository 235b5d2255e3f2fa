//! Minimax advice and game-state tracking
//!
//! The solver owns the set of codes still consistent with all feedback and
//! recommends the next guess under Knuth's minimax rule.

mod engine;
mod minimax;
mod rating;

pub use engine::{Solver, SolverError};
pub use rating::Rating;
