//! CLI entry point for the calculator puzzle solver.
//!
//! Usage:
//!   calc-solver solve <puzzle.json> [options]
//!   calc-solver solve --stdin [options]
//!   calc-solver replay <puzzle.json>
//!
//! Options:
//!   --strategy <name>       exhaustive (default) or random
//!   --max-attempts <n>      Attempt cap for the random strategy (default: 1000000000)
//!   --seed <n>              Seed for the random strategy
//!   --no-prune              Expand revisited states again
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default: warn).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use calc_solver::{
    MoveSequence, PuzzleConfig, SolveError, SolverConfig, SolverResult, Strategy,
    DEFAULT_MAX_ATTEMPTS,
};

#[derive(Parser)]
#[command(name = "calc-solver")]
#[command(about = "Exact-length move search for integer calculator puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a sequence of moves that solves a puzzle
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Search strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::Exhaustive)]
        strategy: StrategyArg,

        /// Maximum candidates tried by the random strategy
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: u64,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,

        /// Expand revisited states again
        #[arg(long)]
        no_prune: bool,
    },

    /// Replay the solution stored in a puzzle file
    Replay {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        #[arg(long)]
        stdin: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Exhaustive,
    Random,
}

/// Output format for `solve`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    search_exhausted: bool,
    states_expanded: usize,
    states_pruned: usize,
    attempts: u64,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<MoveSequence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<i64>>,
}

/// Output format for `replay`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplayOutput {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<i64>>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let success = match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            max_attempts,
            seed,
            no_prune,
        } => {
            let puzzle = load_puzzle(file, stdin);

            let config = SolverConfig {
                strategy: match strategy {
                    StrategyArg::Exhaustive => Strategy::Exhaustive,
                    StrategyArg::Random => Strategy::Random { max_attempts, seed },
                },
                prune_revisited: !no_prune,
            };

            let output = match puzzle.solve(&config) {
                Ok(result) => format_result(&puzzle, &result),
                Err(err) => format_error(&err),
            };
            print_json(&output);
            output.solved
        }

        Commands::Replay { file, stdin } => {
            let puzzle = load_puzzle(file, stdin);
            let output = replay_solution(&puzzle);
            print_json(&output);
            output.valid
        }
    };

    process::exit(if success { 0 } else { 1 });
}

/// Read and parse a puzzle, exiting with a message on failure
fn load_puzzle(file: Option<PathBuf>, stdin: bool) -> PuzzleConfig {
    let json_content = if stdin {
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error: Failed to read from stdin: {}", e);
            process::exit(1);
        }
        buffer
    } else if let Some(path) = file {
        match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Failed to read file {:?}: {}", path, e);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Error: Must provide either a file path or --stdin");
        process::exit(1);
    };

    match serde_json::from_str(&json_content) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error parsing puzzle JSON: {}", e);
            process::exit(1);
        }
    }
}

fn format_result(puzzle: &PuzzleConfig, result: &SolverResult) -> SolveOutput {
    SolveOutput {
        solved: result.solution.is_some(),
        error: None,
        search_exhausted: result.search_exhausted,
        states_expanded: result.states_expanded,
        states_pruned: result.states_pruned,
        attempts: result.attempts,
        time_elapsed_ms: result.time_elapsed_ms,
        solution: result.solution.as_ref().map(|s| s.to_string()),
        moves: result.solution.clone(),
        path: result
            .solution
            .as_ref()
            .and_then(|s| s.trace(puzzle.start).ok()),
    }
}

fn format_error(err: &SolveError) -> SolveOutput {
    error!(%err, "solve failed");
    SolveOutput {
        solved: false,
        error: Some(err.to_string()),
        search_exhausted: false,
        states_expanded: 0,
        states_pruned: 0,
        attempts: 0,
        time_elapsed_ms: 0,
        solution: None,
        moves: None,
        path: None,
    }
}

fn replay_solution(puzzle: &PuzzleConfig) -> ReplayOutput {
    let Some(solution) = &puzzle.solution else {
        return ReplayOutput {
            valid: false,
            reason: Some("puzzle has no solution to replay".to_string()),
            path: None,
        };
    };

    match solution.trace(puzzle.start) {
        Ok(path) => {
            let valid = puzzle.verify(solution);
            ReplayOutput {
                valid,
                reason: if valid {
                    None
                } else {
                    Some(format!(
                        "{} does not take {} to {} in {} moves using the catalog",
                        solution, puzzle.start, puzzle.goal, puzzle.moves
                    ))
                },
                path: Some(path),
            }
        }
        Err(e) => ReplayOutput {
            valid: false,
            reason: Some(e.to_string()),
            path: None,
        },
    }
}

fn print_json<T: Serialize>(output: &T) {
    match serde_json::to_string_pretty(output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}
