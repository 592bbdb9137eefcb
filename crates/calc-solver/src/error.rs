//! Error types for move application and solving.

use thiserror::Error;

use crate::moves::Move;

/// Failure to apply a single move to a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// `Divide(0)`
    #[error("division by zero")]
    DivideByZero,

    /// The result does not fit in an `i64`
    #[error("{mv} overflows when applied to {value}")]
    Overflow { value: i64, mv: Move },

    /// A replacement produced text that is not an integer
    #[error("{mv} produced {text:?}, which is not an integer")]
    Parse { text: String, mv: Move },
}

/// Main error type for solver operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A solution must contain at least one move
    #[error("move budget must be at least 1, got {0}")]
    InvalidMoveBudget(usize),

    /// A catalog entry can never be applied
    #[error("catalog entry {index} is invalid: {source}")]
    InvalidMove {
        index: usize,
        #[source]
        source: MoveError,
    },

    /// The randomized strategy gave up. This does not prove that no solution exists.
    #[error("no solution found after {attempts} random attempts")]
    AttemptsExhausted { attempts: u64 },
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, SolveError>;
