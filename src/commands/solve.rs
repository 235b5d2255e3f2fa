//! Secret solving command
//!
//! Plays the solver's own advice against a caller-supplied secret until the
//! advice is the secret, recording the path taken.

use crate::core::{Code, Proximity};
use crate::solver::{Rating, Solver, SolverError};

/// Result of playing out one secret
pub struct SolveOutcome {
    pub secret: Code,
    pub turns: Vec<TurnRecord>,
    pub ratings: Vec<Rating>,
}

/// A single advised guess and the feedback it earned
pub struct TurnRecord {
    pub guess: Code,
    pub proximity: Proximity,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl SolveOutcome {
    /// Number of guesses used, the winning one included
    #[must_use]
    pub fn num_turns(&self) -> usize {
        self.turns.len()
    }
}

/// Play the solver against a known secret
///
/// The solver follows its own advice every turn, with feedback adjudicated
/// truthfully from the secret. The minimax advice never repeats a losing
/// guess, so the loop always reaches the secret. The solver is reset
/// afterwards and its ratings are folded into the outcome.
///
/// # Errors
/// Returns `SolverError` if the secret does not fit the solver's shape.
/// Truthful feedback can never empty the candidate set.
pub fn solve_secret(solver: &mut Solver, secret: &Code) -> Result<SolveOutcome, SolverError> {
    secret.check_shape(solver.shape())?;

    let num_digits = solver.shape().num_digits();
    let mut turns = Vec::new();

    loop {
        let candidates_before = solver.candidate_count();
        let guess = solver.advise().clone();
        let proximity = Proximity::between(&guess, secret);

        if proximity.is_win(num_digits) {
            turns.push(TurnRecord {
                guess,
                proximity,
                candidates_before,
                candidates_after: 1,
            });
            break;
        }

        solver.record_feedback(&guess, proximity)?;
        turns.push(TurnRecord {
            guess,
            proximity,
            candidates_before,
            candidates_after: solver.candidate_count(),
        });
    }

    Ok(SolveOutcome {
        secret: secret.clone(),
        turns,
        ratings: solver.reset(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shape;

    #[test]
    fn solve_finds_every_secret_of_a_small_shape() {
        let shape = Shape::new(3, 2).unwrap();
        let mut solver = Solver::with_shape(shape);

        for secret in crate::combinatorics::universe(shape) {
            let outcome = solve_secret(&mut solver, &secret).unwrap();
            let last = outcome.turns.last().unwrap();
            assert_eq!(last.guess, secret);
            assert!(last.proximity.is_win(2));
            // The solver is reusable after each game
            assert_eq!(solver.candidate_count(), 9);
        }
    }

    #[test]
    fn solve_immediate_win_when_secret_is_the_opening() {
        let shape = Shape::new(2, 2).unwrap();
        let mut solver = Solver::with_shape(shape);
        let secret = solver.advise().clone();

        let outcome = solve_secret(&mut solver, &secret).unwrap();
        assert_eq!(outcome.num_turns(), 1);
        assert!(outcome.ratings.is_empty());
    }

    #[test]
    fn solve_candidate_counts_shrink() {
        let shape = Shape::new(4, 3).unwrap();
        let mut solver = Solver::with_shape(shape);
        let secret = Code::parse("431", shape).unwrap();

        let outcome = solve_secret(&mut solver, &secret).unwrap();
        for turn in &outcome.turns {
            assert!(turn.candidates_after <= turn.candidates_before);
        }
        // One rating per non-winning turn
        assert_eq!(outcome.ratings.len(), outcome.num_turns() - 1);
    }

    #[test]
    fn solve_rejects_wrong_shape_secret() {
        let mut solver = Solver::new(2, 2).unwrap();
        let secret = Code::parse("111", Shape::new(2, 3).unwrap()).unwrap();
        assert!(solve_secret(&mut solver, &secret).is_err());
    }
}
