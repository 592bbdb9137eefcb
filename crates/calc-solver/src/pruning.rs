//! Search space pruning for the exhaustive solver.
//!
//! Two checks live here: catalog validation before any search starts, and
//! the set of `(value, moves remaining)` states the depth-first search has
//! already expanded.

use std::collections::HashSet;

use tracing::trace;

use crate::error::SolveError;
use crate::moves::Move;

/// Reject a catalog containing a move that can never be applied.
pub fn validate_catalog(catalog: &[Move]) -> Result<(), SolveError> {
    for (index, mv) in catalog.iter().enumerate() {
        mv.validate()
            .map_err(|source| SolveError::InvalidMove { index, source })?;
    }
    Ok(())
}

/// States already expanded by the depth-first search.
///
/// Moves are pure, so two frames with the same value and the same number of
/// moves left have identical subtrees. The search pops a repeated state only
/// after the first copy's subtree has been fully explored without success,
/// so skipping it never changes which solution is found first.
#[derive(Debug, Default)]
pub struct VisitedStates {
    enabled: bool,
    seen: HashSet<(i64, usize)>,
    pruned: usize,
}

impl VisitedStates {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Default::default()
        }
    }

    /// Record a state about to be expanded. Returns `false` if it was seen before.
    pub fn first_visit(&mut self, value: i64, remaining: usize) -> bool {
        if !self.enabled || self.seen.insert((value, remaining)) {
            return true;
        }
        self.pruned += 1;
        trace!(value, remaining, "skipping revisited state");
        false
    }

    /// Number of states skipped so far
    pub fn pruned(&self) -> usize {
        self.pruned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;

    #[test]
    fn test_validate_catalog_accepts_valid_moves() {
        let catalog = [Move::Divide(2), Move::Add(0), Move::Replace(1, 1)];
        assert!(validate_catalog(&catalog).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_validate_catalog_reports_zero_divisor() {
        let catalog = [Move::Add(1), Move::Divide(0)];
        assert_eq!(
            validate_catalog(&catalog),
            Err(SolveError::InvalidMove {
                index: 1,
                source: MoveError::DivideByZero,
            })
        );
    }

    #[test]
    fn test_revisited_state_is_pruned() {
        let mut visited = VisitedStates::new(true);
        assert!(visited.first_visit(5, 2));
        assert!(visited.first_visit(5, 1));
        assert!(!visited.first_visit(5, 2));
        assert_eq!(visited.pruned(), 1);
    }

    #[test]
    fn test_disabled_never_prunes() {
        let mut visited = VisitedStates::new(false);
        assert!(visited.first_visit(5, 2));
        assert!(visited.first_visit(5, 2));
        assert_eq!(visited.pruned(), 0);
    }
}
