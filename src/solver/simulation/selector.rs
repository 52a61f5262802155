//! Simulation-based guess selection
//!
//! Selects the candidate that leaves the fewest candidates on average.

use super::calculator::{SimulationMetrics, calculate_metrics};
use crate::core::{Candidate, CandidateSet, EngineError};
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Select best guess by minimizing the summed remaining-candidate count
///
/// Every candidate is scored in parallel; all scores are collected before the
/// minimum is taken. Ties go to the candidate seen first. Returns `None` if
/// there are no candidates.
///
/// # Errors
/// Propagates `EngineError::LengthMismatch` from evaluation (never raised for a
/// well-formed candidate set).
///
/// # Examples
/// ```
/// use primel_solver::core::CandidateSet;
/// use primel_solver::solver::simulation::select_best_guess;
///
/// let candidates = CandidateSet::from_numbers([10007, 10009, 10037], 5);
/// let (best, metrics) = select_best_guess(&candidates).unwrap().unwrap();
///
/// assert!(candidates.contains(best.number()));
/// assert!(metrics.total_remaining >= candidates.len());
/// ```
pub fn select_best_guess(
    candidates: &CandidateSet,
) -> Result<Option<(&Candidate, SimulationMetrics)>, EngineError> {
    let start = Instant::now();

    let scored = candidates
        .as_slice()
        .par_iter()
        .map(|candidate| calculate_metrics(candidate.digits(), candidates).map(|m| (candidate, m)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        candidates = candidates.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "simulated every candidate"
    );

    Ok(scored
        .into_iter()
        .min_by_key(|(_, metrics)| metrics.total_remaining))
}
