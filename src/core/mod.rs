//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod proximity;
mod shape;

pub use code::{Code, CodeError};
pub use proximity::Proximity;
pub use shape::{MAX_UNIVERSE_SIZE, Shape, ShapeError};
