//! Primel solving algorithms
//!
//! Candidate filtering, the two guess heuristics and the strategies and
//! solving session built on top of them.

mod engine;
pub mod filter;
pub mod frequency;
pub mod simulation;
pub mod strategy;

pub use engine::{RoundSummary, Solver};
pub use filter::{filter_candidates, narrow};
pub use strategy::{
    FrequencyStrategy, HybridStrategy, Score, SimulationStrategy, Strategy, StrategyType,
};

use crate::core::{CandidateSet, EngineError, Number};

/// Pick the best guess among `candidates` with `strategy`
///
/// # Errors
/// Returns `EngineError::EmptyCandidateSet` if there are no candidates.
///
/// # Examples
/// ```
/// use primel_solver::core::CandidateSet;
/// use primel_solver::solver::{FrequencyStrategy, select_best_guess};
///
/// let candidates = CandidateSet::from_numbers([10007, 10009, 10037], 5);
/// let guess = select_best_guess(&candidates, &FrequencyStrategy).unwrap();
/// assert!(candidates.contains(guess));
/// ```
pub fn select_best_guess<S: Strategy + ?Sized>(
    candidates: &CandidateSet,
    strategy: &S,
) -> Result<Number, EngineError> {
    strategy
        .select_guess(candidates)
        .map(|(guess, _)| guess.number())
}
