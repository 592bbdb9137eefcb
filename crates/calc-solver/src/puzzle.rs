//! Puzzle description that matches the JSON accepted by the CLI.
//!
//! ```json
//! {"start": 11, "goal": 29, "moves": 5,
//!  "catalog": [{"divide": 2}, {"add": 3}, {"replace": [1, 2]}, {"replace": [2, 9]}]}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::moves::Move;
use crate::sequence::MoveSequence;
use crate::solver::{solve_with_config, SolverConfig, SolverResult};

/// The complete puzzle configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub start: i64,
    pub goal: i64,
    /// Exact number of moves a solution must use
    pub moves: usize,
    pub catalog: Vec<Move>,
    // Optional known solution, checked by `calc-solver replay`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<MoveSequence>,
}

impl PuzzleConfig {
    pub fn new(start: i64, goal: i64, moves: usize, catalog: Vec<Move>) -> Self {
        Self {
            start,
            goal,
            moves,
            catalog,
            solution: None,
        }
    }

    pub fn solve(&self, config: &SolverConfig) -> Result<SolverResult> {
        solve_with_config(self.start, self.goal, self.moves, &self.catalog, config)
    }

    /// Does `sequence` solve this puzzle using only catalog moves?
    pub fn verify(&self, sequence: &MoveSequence) -> bool {
        sequence.len() == self.moves
            && sequence.iter().all(|mv| self.catalog.contains(mv))
            && sequence.replay(self.start) == Ok(self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_puzzle() -> PuzzleConfig {
        PuzzleConfig::new(
            11,
            29,
            5,
            vec![
                Move::Divide(2),
                Move::Add(3),
                Move::Replace(1, 2),
                Move::Replace(2, 9),
            ],
        )
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "start": 11,
            "goal": 29,
            "moves": 5,
            "catalog": [{"divide": 2}, {"add": 3}, {"replace": [1, 2]}, {"replace": [2, 9]}]
        }"#;
        let puzzle: PuzzleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(puzzle, sample_puzzle());
    }

    #[test]
    fn test_parse_json_with_solution() {
        let json = r#"{"start": 9, "goal": 7, "moves": 2,
            "catalog": [{"divide": 3}, {"add": 4}],
            "solution": [{"divide": 3}, {"add": 4}]}"#;
        let puzzle: PuzzleConfig = serde_json::from_str(json).unwrap();
        let solution = puzzle.solution.clone().unwrap();
        assert_eq!(solution.moves(), &[Move::Divide(3), Move::Add(4)]);
        assert!(puzzle.verify(&solution));
    }

    #[test]
    fn test_solve_and_verify() {
        let puzzle = sample_puzzle();
        let result = puzzle.solve(&SolverConfig::default()).unwrap();
        assert!(puzzle.verify(&result.solution.unwrap()));
    }

    #[test]
    fn test_verify_rejects_wrong_length_and_foreign_moves() {
        let puzzle = PuzzleConfig::new(9, 7, 2, vec![Move::Divide(3), Move::Add(4)]);

        let short: MoveSequence = [Move::Add(-2)].into_iter().collect();
        assert!(!puzzle.verify(&short));

        let foreign: MoveSequence = [Move::Add(-1), Move::Add(-1)].into_iter().collect();
        assert_eq!(foreign.replay(9), Ok(7));
        assert!(!puzzle.verify(&foreign));

        let wrong: MoveSequence = [Move::Add(4), Move::Divide(3)].into_iter().collect();
        assert!(!puzzle.verify(&wrong));
    }
}
