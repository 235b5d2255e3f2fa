//! Mastermind Minimax - CLI
//!
//! Knuth minimax solver for Mastermind. The solver core only consumes
//! guess/feedback pairs; these commands are thin collaborators that drive it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_minimax::{
    commands::{run_assist, run_bench, solve_secret},
    core::Code,
    output::{print_bench_stats, print_solve_outcome},
    solver::Solver,
};

#[derive(Parser)]
#[command(
    name = "mastermind_minimax",
    about = "Mastermind solver using Knuth's minimax algorithm",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Largest symbol value; symbols run over 1..=max-value
    #[arg(short = 'm', long, global = true, default_value = "7")]
    max_value: u16,

    /// Number of symbols per code
    #[arg(short = 'd', long, global = true, default_value = "4")]
    digits: u16,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor for a game adjudicated elsewhere (default)
    Assist,

    /// Play out a known secret and show the path taken
    Solve {
        /// The secret code, e.g. "1123" or "10-2-12"
        secret: String,

        /// Show candidate counts and ratings per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Measure turn counts over secrets sampled across the universe
    Bench {
        /// Number of secrets to sample
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut solver = Solver::new(cli.max_value, cli.digits)
        .context("cannot configure the solver with these parameters")?;

    // Default to the advisor if no command given
    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => run_assist(&mut solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { secret, verbose } => {
            let secret = Code::parse(&secret, solver.shape()).context("invalid secret code")?;
            let outcome = solve_secret(&mut solver, &secret)?;
            print_solve_outcome(&outcome, verbose);
            Ok(())
        }
        Commands::Bench { count } => {
            let stats = run_bench(&mut solver, count)?;
            print_bench_stats(&stats);
            Ok(())
        }
    }
}
