//! Mastermind Minimax Solver
//!
//! A solver for the code-breaking game Mastermind using Knuth's minimax
//! algorithm: at every turn it recommends the guess that minimizes the
//! worst-case number of secrets still consistent with the feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_minimax::core::{Code, Proximity, Shape};
//!
//! let shape = Shape::new(6, 4).unwrap();
//! let guess = Code::parse("1123", shape).unwrap();
//! let secret = Code::parse("1233", shape).unwrap();
//!
//! // Two symbols correct in place, one correct but misplaced
//! assert_eq!(Proximity::between(&guess, &secret), Proximity::new(2, 1));
//! ```

// Core domain types
pub mod core;

// Universe enumeration and the possibility index
pub mod combinatorics;

// Minimax advice and game-state tracking
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
