//! Solver benchmark over sampled secrets
//!
//! Plays the solver against secrets drawn evenly across the universe and
//! aggregates the turn-count distribution. Sampling is a deterministic
//! stride, so runs are reproducible.

use super::solve::solve_secret;
use crate::combinatorics;
use crate::solver::{Solver, SolverError};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Aggregated results of one benchmark run
#[derive(Debug)]
pub struct BenchStats {
    pub games: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turn count -> number of games finishing in exactly that many turns
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

/// Play the solver against up to `sample` secrets spread over the universe
///
/// # Errors
/// Returns `SolverError` only on internal inconsistency; truthful
/// self-adjudicated feedback cannot empty the candidate set.
///
/// # Panics
/// Panics if the progress-bar template is malformed (a programming error).
pub fn run_bench(solver: &mut Solver, sample: usize) -> Result<BenchStats, SolverError> {
    let universe = combinatorics::universe(solver.shape());
    let sample = sample.clamp(1, universe.len());
    let stride = universe.len() / sample;
    let secrets = universe.iter().step_by(stride.max(1)).take(sample);

    let progress = ProgressBar::new(sample as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let started = Instant::now();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut total_turns = 0usize;

    for secret in secrets {
        let outcome = solve_secret(solver, secret)?;
        total_turns += outcome.num_turns();
        *distribution.entry(outcome.num_turns()).or_insert(0) += 1;
        progress.inc(1);
    }
    progress.finish_and_clear();

    let min_turns = distribution.keys().next().copied().unwrap_or(0);
    let max_turns = distribution.keys().next_back().copied().unwrap_or(0);

    Ok(BenchStats {
        games: sample,
        average_turns: total_turns as f64 / sample as f64,
        min_turns,
        max_turns,
        distribution,
        duration: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shape;

    #[test]
    fn bench_covers_requested_sample() {
        let mut solver = Solver::with_shape(Shape::new(3, 2).unwrap());
        let stats = run_bench(&mut solver, 9).unwrap();

        assert_eq!(stats.games, 9);
        assert_eq!(stats.distribution.values().sum::<usize>(), 9);
        assert!(stats.min_turns >= 1);
        assert!(stats.max_turns <= 9);
        assert!(stats.average_turns >= 1.0);
    }

    #[test]
    fn bench_sample_clamped_to_universe() {
        let mut solver = Solver::with_shape(Shape::new(2, 2).unwrap());
        let stats = run_bench(&mut solver, 1000).unwrap();
        assert_eq!(stats.games, 4);
    }

    #[test]
    fn bench_single_game() {
        let mut solver = Solver::with_shape(Shape::new(2, 2).unwrap());
        let stats = run_bench(&mut solver, 1).unwrap();
        assert_eq!(stats.games, 1);
        assert_eq!(stats.min_turns, stats.max_turns);
    }
}
