//! Interactive advisor mode
//!
//! Text-based loop for a game adjudicated elsewhere: the user relays each
//! guess and its peg feedback, the solver keeps the candidate set and
//! recommends the next move. On a win the accumulated ratings are displayed
//! and the solver resets for the next game.

use crate::core::{Code, Proximity};
use crate::output::print_ratings;
use crate::solver::{Solver, SolverError};
use colored::Colorize;
use std::io::{self, Write};

/// Most candidates ever printed at once by `show`
const MAX_PRINT_POSSIBILITIES: usize = 75;

/// Run the interactive advisor loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_assist(solver: &mut Solver) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Mastermind Minimax - Advisor Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Playing {}.", solver.shape());
    println!("After each guess, relay the feedback:\n");
    println!("  <black> <white>          the advised code was played");
    println!("  <code> <black> <white>   some other code was played\n");
    println!("Commands: 'show' remaining codes, 'count', 'win', 'new', 'quit'\n");

    loop {
        let count = solver.candidate_count();
        println!("────────────────────────────────────────────────────────────");
        println!(
            "{count} candidate{} remaining",
            if count == 1 { "" } else { "s" }
        );
        println!(
            "Suggested guess: {}",
            solver.advise().to_string().bright_yellow().bold()
        );

        let input = read_input("Feedback or command")?.to_lowercase();
        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nGoodbye!\n");
                return Ok(());
            }
            "new" | "reset" => {
                finish_game(solver);
                continue;
            }
            "win" | "correct" => {
                println!("\n{}", "Solved!".bright_green().bold());
                finish_game(solver);
                continue;
            }
            "show" | "poss" => {
                show_candidates(solver);
                continue;
            }
            "count" => continue,
            _ => {}
        }

        match parse_feedback(&input, solver) {
            Ok((code, proximity)) => {
                if proximity.is_win(solver.shape().num_digits()) {
                    println!("\n{}", "Solved!".bright_green().bold());
                    finish_game(solver);
                    continue;
                }
                match solver.record_feedback(&code, proximity) {
                    Ok(()) => {}
                    Err(SolverError::NoConsistentCandidates { .. }) => {
                        println!(
                            "\n{}",
                            "No code matches that feedback - one of the reports must be wrong."
                                .bright_red()
                        );
                        println!("The candidate set was kept as it was.\n");
                    }
                    Err(err) => println!("\n{}\n", err.to_string().bright_red()),
                }
            }
            Err(message) => println!("\n{}\n", message.bright_red()),
        }
    }
}

/// Drain the ratings, show them if any, and restore the full universe
fn finish_game(solver: &mut Solver) {
    let ratings = solver.reset();
    if ratings.is_empty() {
        println!("\nNew game started.\n");
    } else {
        print_ratings(&ratings);
        println!("New game started.\n");
    }
}

fn show_candidates(solver: &Solver) {
    let count = solver.candidate_count();
    if count > MAX_PRINT_POSSIBILITIES {
        println!("\n{count} candidates remain - too many to list.\n");
        return;
    }

    println!();
    for candidate in solver.remaining_candidates() {
        println!("  • {candidate}");
    }
    println!();
}

/// Parse "<black> <white>" (advised code played) or "<code> <black> <white>"
fn parse_feedback(input: &str, solver: &Solver) -> Result<(Code, Proximity), String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let (code, pegs) = match tokens.as_slice() {
        [black, white] => (solver.advise().clone(), [*black, *white]),
        [code, black, white] => {
            let code = Code::parse(code, solver.shape()).map_err(|e| e.to_string())?;
            (code, [*black, *white])
        }
        _ => {
            return Err(
                "Enter '<black> <white>', '<code> <black> <white>', or a command".to_string(),
            );
        }
    };

    let black: u16 = pegs[0]
        .parse()
        .map_err(|_| format!("Cannot read black pegs from {:?}", pegs[0]))?;
    let white: u16 = pegs[1]
        .parse()
        .map_err(|_| format!("Cannot read white pegs from {:?}", pegs[1]))?;

    Ok((code, Proximity::new(black, white)))
}

/// Get user input with a prompt
fn read_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
