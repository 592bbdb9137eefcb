//! Ordered record of played moves and its replay.
//!
//! A `MoveSequence` is built while searching and returned as the solution.
//! Replaying it is a left fold of `Move::apply` over the stored moves.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::MoveError;
use crate::moves::Move;

/// Sequences up to this length are stored without a heap allocation
const INLINE_MOVES: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSequence {
    moves: SmallVec<[Move; INLINE_MOVES]>,
}

impl MoveSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move to the end
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Prepend a move, for building a solution from the goal backwards
    pub fn insert_at_start(&mut self, mv: Move) {
        self.moves.insert(0, mv);
    }

    /// Number of moves played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Apply every move in order starting from `start` and return the final value.
    pub fn replay(&self, start: i64) -> Result<i64, MoveError> {
        self.moves.iter().try_fold(start, |value, mv| mv.apply(value))
    }

    /// Like [`replay`](Self::replay) but keeps every value along the way,
    /// including `start`.
    pub fn trace(&self, start: i64) -> Result<Vec<i64>, MoveError> {
        let mut values = Vec::with_capacity(self.moves.len() + 1);
        values.push(start);
        let mut value = start;
        for mv in &self.moves {
            value = mv.apply(value)?;
            values.push(value);
        }
        Ok(values)
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
