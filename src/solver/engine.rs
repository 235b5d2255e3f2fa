//! Solver state machine for one game session
//!
//! A `Solver` tracks the candidate set for an in-progress game and keeps its
//! advice in step with it: every state transition recomputes the memoized
//! advice before returning, so `advise` can never observe a stale value.

use super::minimax;
use super::rating::{Rating, removed_percentage};
use crate::combinatorics::{self, ShapeTables};
use crate::core::{Code, CodeError, Proximity, Shape, ShapeError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::Arc;

/// Knuth minimax solver for one Mastermind session
///
/// Owns the remaining-candidate set exclusively; share across sessions only
/// with external synchronization. The per-shape tables underneath are shared
/// and read-only.
pub struct Solver {
    tables: Arc<ShapeTables>,
    remaining: FxHashSet<u16>,
    advice: u16,
    ratings: Vec<Rating>,
}

/// Error type for feedback the solver cannot accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The played code does not fit the configured shape
    ShapeMismatch(CodeError),
    /// The feedback rules out every remaining candidate
    ///
    /// Signals a lying or faulty feedback source; the solver state is left
    /// untouched so the caller can decide what to distrust.
    NoConsistentCandidates { proximity: Proximity },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch(inner) => write!(f, "Code does not fit the game shape: {inner}"),
            Self::NoConsistentCandidates { proximity } => {
                write!(f, "No candidate is consistent with feedback {proximity}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ShapeMismatch(inner) => Some(inner),
            Self::NoConsistentCandidates { .. } => None,
        }
    }
}

impl From<CodeError> for SolverError {
    fn from(inner: CodeError) -> Self {
        Self::ShapeMismatch(inner)
    }
}

impl Solver {
    /// Create a solver with every code of the shape still possible
    ///
    /// # Errors
    /// Returns `ShapeError` for non-positive parameters or an over-budget
    /// universe, mirroring the shape validation.
    pub fn new(max_value: u16, num_digits: u16) -> Result<Self, ShapeError> {
        Ok(Self::with_shape(Shape::new(max_value, num_digits)?))
    }

    /// Create a solver from an already validated shape
    #[must_use]
    pub fn with_shape(shape: Shape) -> Self {
        let tables = combinatorics::tables(shape);
        let remaining: FxHashSet<u16> = (0..tables.len() as u16).collect();
        let advice = minimax::best_guess(&tables, &remaining);
        Self {
            tables,
            remaining,
            advice,
            ratings: Vec::new(),
        }
    }

    /// The shape this solver is configured for
    #[inline]
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.tables.shape()
    }

    /// Restore the full universe and hand back the accumulated ratings
    ///
    /// Called when a game concludes, win or lose. The returned ratings are
    /// the per-turn records of the game that just ended, oldest first.
    pub fn reset(&mut self) -> Vec<Rating> {
        self.remaining = (0..self.tables.len() as u16).collect();
        self.refresh_advice();
        std::mem::take(&mut self.ratings)
    }

    /// Switch to a new shape, resetting the game
    ///
    /// Returns the ratings of the abandoned game.
    ///
    /// # Errors
    /// Returns `ShapeError` under the same conditions as [`Solver::new`],
    /// in which case the current configuration is kept.
    pub fn reconfigure(
        &mut self,
        max_value: u16,
        num_digits: u16,
    ) -> Result<Vec<Rating>, ShapeError> {
        let shape = Shape::new(max_value, num_digits)?;
        self.tables = combinatorics::tables(shape);
        Ok(self.reset())
    }

    /// The sorted list of codes still consistent with all feedback
    #[must_use]
    pub fn remaining_candidates(&self) -> Vec<Code> {
        let mut ids: Vec<u16> = self.remaining.iter().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(|id| self.tables.code(id).clone()).collect()
    }

    /// How many codes are still consistent with all feedback
    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.remaining.len()
    }

    /// Ratings recorded so far in the current game
    #[inline]
    #[must_use]
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// The best next guess under Knuth's minimax rule
    ///
    /// Memoized: recomputed only when the candidate set changes, as part of
    /// that same transition. Repeated calls are free and idempotent.
    #[inline]
    #[must_use]
    pub fn advise(&self) -> &Code {
        self.tables.code(self.advice)
    }

    /// Record that `code` was played and produced `proximity`
    ///
    /// Captures a [`Rating`] for the turn, intersects the candidate set with
    /// the codes that would have produced this feedback, and refreshes the
    /// advice. A winning feedback (`black == num_digits`) matches no other
    /// code and should end the game via [`Solver::reset`] instead.
    ///
    /// # Errors
    /// - `ShapeMismatch` if `code` does not fit the configured shape
    /// - `NoConsistentCandidates` if the feedback rules out every remaining
    ///   candidate; the solver state is left exactly as it was
    pub fn record_feedback(
        &mut self,
        code: &Code,
        proximity: Proximity,
    ) -> Result<(), SolverError> {
        let played = self.resolve(code)?;

        let new_remaining: FxHashSet<u16> = self
            .tables
            .buckets_of(played)
            .get(&proximity)
            .map(|bucket| {
                bucket
                    .iter()
                    .copied()
                    .filter(|id| self.remaining.contains(id))
                    .collect()
            })
            .unwrap_or_default();

        if new_remaining.is_empty() {
            return Err(SolverError::NoConsistentCandidates { proximity });
        }

        // Rate the turn against the state the player actually faced.
        let old_count = self.remaining.len();
        self.ratings.push(Rating {
            best_worst_removed: removed_percentage(
                old_count,
                minimax::worst_case(&self.tables, &self.remaining, self.advice),
            ),
            best_code: self.tables.code(self.advice).clone(),
            worst_removed: removed_percentage(
                old_count,
                minimax::worst_case(&self.tables, &self.remaining, played),
            ),
            actual_removed: removed_percentage(old_count, new_remaining.len()),
        });

        self.remaining = new_remaining;
        self.refresh_advice();
        Ok(())
    }

    /// Recompute the memoized advice from the current candidate set
    fn refresh_advice(&mut self) {
        self.advice = minimax::best_guess(&self.tables, &self.remaining);
    }

    /// Validate a played code against the shape and map it to its id
    fn resolve(&self, code: &Code) -> Result<u16, SolverError> {
        code.check_shape(self.shape())?;

        // A shape-valid code is in the universe by construction
        Ok(self
            .tables
            .id_of(code)
            .expect("shape-valid code is enumerated"))
    }
}
