//! Exact-length move search.
//!
//! Both strategies look for a sequence of exactly `max_moves` catalog moves,
//! repetition allowed, that turns `start` into `goal`:
//!
//! - [`Strategy::Exhaustive`] walks the search tree depth-first with catalog
//!   order as the priority at every level and stops at the first solution.
//!   It is deterministic, and `None` proves no solution exists.
//! - [`Strategy::Random`] draws whole sequences uniformly at random until one
//!   replays to the goal or the attempt cap runs out. Running out is an error,
//!   since it proves nothing.
//!
//! A move that fails to apply (parse failure or overflow) rejects that branch
//! or candidate; the search carries on with the next one.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::error::{Result, SolveError};
use crate::moves::Move;
use crate::pruning::{validate_catalog, VisitedStates};
use crate::sequence::MoveSequence;

/// Attempt cap used by the random strategy unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000_000;

/// How the solver explores the space of move sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Deterministic depth-first search, first solution in catalog order wins
    #[default]
    Exhaustive,
    /// Uniform resampling of whole sequences, bounded by `max_attempts`
    Random {
        max_attempts: u64,
        /// Fixed seed for reproducible runs, entropy otherwise
        seed: Option<u64>,
    },
}

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Skip `(value, moves left)` states the exhaustive search already expanded
    pub prune_revisited: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Exhaustive,
            prune_revisited: true,
        }
    }
}

/// Result of a solver run
#[derive(Debug, Clone, Default)]
pub struct SolverResult {
    /// The first sequence found, if any
    pub solution: Option<MoveSequence>,
    /// Whether the whole search space was explored without a solution
    pub search_exhausted: bool,
    /// Number of states the exhaustive search expanded
    pub states_expanded: usize,
    /// Number of revisited states skipped
    pub states_pruned: usize,
    /// Number of candidates the random strategy replayed
    pub attempts: u64,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// Find a sequence of exactly `max_moves` moves from `catalog` taking `start` to `goal`.
///
/// Uses the exhaustive strategy, so `Ok(None)` means no such sequence exists.
/// Fails if `max_moves` is zero or the catalog contains `Divide(0)`.
pub fn solve(
    start: i64,
    goal: i64,
    max_moves: usize,
    catalog: &[Move],
) -> Result<Option<MoveSequence>> {
    solve_with_config(start, goal, max_moves, catalog, &SolverConfig::default())
        .map(|result| result.solution)
}

/// Run the configured strategy and report search statistics alongside the solution.
pub fn solve_with_config(
    start: i64,
    goal: i64,
    max_moves: usize,
    catalog: &[Move],
    config: &SolverConfig,
) -> Result<SolverResult> {
    if max_moves == 0 {
        return Err(SolveError::InvalidMoveBudget(max_moves));
    }
    validate_catalog(catalog)?;

    let start_time = Instant::now();
    debug!(
        start,
        goal,
        max_moves,
        catalog_len = catalog.len(),
        strategy = ?config.strategy,
        "solving"
    );

    let mut result = if catalog.is_empty() {
        SolverResult {
            search_exhausted: true,
            ..Default::default()
        }
    } else {
        match config.strategy {
            Strategy::Exhaustive => {
                exhaustive_search(start, goal, max_moves, catalog, config.prune_revisited)
            }
            Strategy::Random { max_attempts, seed } => {
                random_search(start, goal, max_moves, catalog, max_attempts, seed)?
            }
        }
    };
    result.time_elapsed_ms = start_time.elapsed().as_millis() as u64;

    debug!(
        solved = result.solution.is_some(),
        search_exhausted = result.search_exhausted,
        states_expanded = result.states_expanded,
        states_pruned = result.states_pruned,
        attempts = result.attempts,
        time_elapsed_ms = result.time_elapsed_ms,
        "search finished"
    );
    Ok(result)
}

/// A frame in the search: the value reached and the moves that reached it
#[derive(Debug, Clone)]
struct SearchFrame {
    value: i64,
    played: MoveSequence,
}

impl SearchFrame {
    fn root(start: i64) -> Self {
        Self {
            value: start,
            played: MoveSequence::new(),
        }
    }

    fn child(&self, mv: Move, value: i64) -> Self {
        let mut played = self.played.clone();
        played.push(mv);
        Self { value, played }
    }
}

/// Depth-first search on an explicit stack.
///
/// Children are pushed in reverse catalog order so they pop in catalog order,
/// which visits sequences in exactly the order a recursive search would.
fn exhaustive_search(
    start: i64,
    goal: i64,
    max_moves: usize,
    catalog: &[Move],
    prune_revisited: bool,
) -> SolverResult {
    let mut visited = VisitedStates::new(prune_revisited);
    let mut states_expanded = 0;
    let mut stack = vec![SearchFrame::root(start)];

    while let Some(frame) = stack.pop() {
        let remaining = max_moves - frame.played.len();

        if remaining == 0 {
            if frame.value == goal {
                return SolverResult {
                    solution: Some(frame.played),
                    search_exhausted: false,
                    states_expanded,
                    states_pruned: visited.pruned(),
                    ..Default::default()
                };
            }
            continue;
        }

        if !visited.first_visit(frame.value, remaining) {
            continue;
        }
        states_expanded += 1;

        for &mv in catalog.iter().rev() {
            match mv.apply(frame.value) {
                Ok(next) => stack.push(frame.child(mv, next)),
                Err(err) => trace!(value = frame.value, %err, "rejecting branch"),
            }
        }
    }

    SolverResult {
        solution: None,
        search_exhausted: true,
        states_expanded,
        states_pruned: visited.pruned(),
        ..Default::default()
    }
}

/// Resample whole sequences until one replays to `goal`.
fn random_search(
    start: i64,
    goal: i64,
    max_moves: usize,
    catalog: &[Move],
    max_attempts: u64,
    seed: Option<u64>,
) -> Result<SolverResult> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for attempt in 1..=max_attempts {
        let candidate: MoveSequence = (0..max_moves)
            .map(|_| catalog[rng.gen_range(0..catalog.len())])
            .collect();

        if candidate.replay(start) == Ok(goal) {
            return Ok(SolverResult {
                solution: Some(candidate),
                attempts: attempt,
                ..Default::default()
            });
        }
    }

    warn!(max_attempts, "random search used up its attempts");
    Err(SolveError::AttemptsExhausted {
        attempts: max_attempts,
    })
}
