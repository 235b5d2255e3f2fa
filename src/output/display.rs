//! Display functions for command results

use super::formatters::removal_bar;
use crate::commands::{BenchStats, SolveOutcome};
use crate::solver::Rating;
use colored::Colorize;

/// Print the per-turn ratings of a finished game
pub fn print_ratings(ratings: &[Rating]) {
    if ratings.is_empty() {
        return;
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME RATINGS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n  turn  best guess   guaranteed   played   realized");

    for (i, rating) in ratings.iter().enumerate() {
        println!(
            "  {:>4}  {:<11}  {:>9}%  {:>6}%  {:>7}%",
            (i + 1).to_string().bright_black(),
            rating.best_code.to_string().bright_yellow(),
            rating.best_worst_removed,
            rating.worst_removed,
            rating.actual_removed,
        );
    }
    println!();
}

/// Print the path the solver took to a secret
pub fn print_solve_outcome(outcome: &SolveOutcome, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        outcome.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in outcome.turns.iter().enumerate() {
        println!("\nTurn {}: {} ({})", i + 1, turn.guess, turn.proximity);
        if verbose {
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
        }
    }

    println!(
        "\n{}",
        format!("Solved in {} guesses", outcome.num_turns())
            .green()
            .bold()
    );

    if verbose {
        print_ratings(&outcome.ratings);
    }
}

/// Print aggregated benchmark statistics
pub fn print_bench_stats(stats: &BenchStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        stats.min_turns.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        stats.max_turns.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for (&turns, &games) in &stats.distribution {
        let pct = (games as f64 / stats.games as f64) * 100.0;
        let bar = removal_bar(pct as u8, 40);
        println!("   {turns}: {} {games:4} ({pct:5.1}%)", bar.green());
    }
    println!();
}
