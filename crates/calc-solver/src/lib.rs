//! Solver for integer calculator puzzles.
//!
//! Given a start value, a goal and a catalog of moves (divide, add, replace
//! digits), this crate finds a sequence of exactly the requested number of
//! moves that turns the start into the goal, and replays such sequences.

pub mod error;
pub mod moves;
pub mod pruning;
pub mod puzzle;
pub mod sequence;
pub mod solver;

// Re-export main types
pub use error::{MoveError, SolveError};
pub use moves::Move;
pub use puzzle::PuzzleConfig;
pub use sequence::MoveSequence;
pub use solver::{
    solve, solve_with_config, SolverConfig, SolverResult, Strategy, DEFAULT_MAX_ATTEMPTS,
};
