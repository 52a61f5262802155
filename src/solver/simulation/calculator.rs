//! Simulated remaining-candidate counts
//!
//! Treats every candidate as the hypothetical solution, evaluates the guess
//! against it, filters the candidate set with the resulting feedback, and sums
//! the sizes of the filtered sets.
//!
//! Hypothetical solutions producing the same report filter to the same set, so
//! reports are tallied first (per worker, then reduced) and each distinct
//! report is filtered once. The sum is unchanged.

use crate::core::{CandidateSet, Digits, EngineError, FeedbackReport};
use crate::solver::filter::filter_candidates;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Outcome of simulating a guess against every candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationMetrics {
    /// Sum of remaining-candidate counts over all hypothetical solutions (lower is better)
    pub total_remaining: usize,
    /// Average remaining-candidate count per hypothetical solution
    pub expected_remaining: f64,
    /// Largest remaining-candidate count for any hypothetical solution
    pub worst_case: usize,
    /// Number of distinct feedback reports the guess can produce
    pub distinct_outcomes: usize,
}

impl SimulationMetrics {
    const EMPTY: Self = Self {
        total_remaining: 0,
        expected_remaining: 0.0,
        worst_case: 0,
        distinct_outcomes: 0,
    };
}

/// Simulate `guess` against every candidate as the solution
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if the guess width differs from the
/// candidate width.
///
/// # Examples
/// ```
/// use primel_solver::core::{CandidateSet, digits_of};
/// use primel_solver::solver::simulation::calculate_metrics;
///
/// let candidates = CandidateSet::from_numbers([10007, 10009], 5);
/// let metrics = calculate_metrics(&digits_of(10007, 5), &candidates).unwrap();
///
/// // Either answer is pinned down after guessing 10007
/// assert_eq!(metrics.total_remaining, 2);
/// assert_eq!(metrics.worst_case, 1);
/// ```
pub fn calculate_metrics(
    guess: &Digits,
    candidates: &CandidateSet,
) -> Result<SimulationMetrics, EngineError> {
    if candidates.is_empty() {
        return Ok(SimulationMetrics::EMPTY);
    }

    let outcomes = group_by_feedback(guess, candidates)?;

    let mut total_remaining = 0;
    let mut worst_case = 0;
    for (report, &solutions) in &outcomes {
        let remaining = filter_candidates(report, candidates)?.len();
        total_remaining += solutions * remaining;
        worst_case = worst_case.max(remaining);
    }

    Ok(SimulationMetrics {
        total_remaining,
        expected_remaining: total_remaining as f64 / candidates.len() as f64,
        worst_case,
        distinct_outcomes: outcomes.len(),
    })
}

/// Simulation score of a guess: the summed remaining-candidate count
///
/// # Errors
/// Same as [`calculate_metrics`].
pub fn calculate_total_remaining(
    guess: &Digits,
    candidates: &CandidateSet,
) -> Result<usize, EngineError> {
    calculate_metrics(guess, candidates).map(|m| m.total_remaining)
}

/// Count how many hypothetical solutions produce each report
fn group_by_feedback(
    guess: &Digits,
    candidates: &CandidateSet,
) -> Result<FxHashMap<FeedbackReport, usize>, EngineError> {
    candidates
        .as_slice()
        .par_iter()
        .try_fold(
            FxHashMap::default,
            |mut counts: FxHashMap<FeedbackReport, usize>,
             solution|
             -> Result<_, EngineError> {
                let report = FeedbackReport::evaluate(guess, solution.digits())?;
                *counts.entry(report).or_insert(0) += 1;
                Ok(counts)
            },
        )
        .try_reduce(FxHashMap::default, |mut merged, partial| {
            for (report, count) in partial {
                *merged.entry(report).or_insert(0) += count;
            }
            Ok(merged)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::digits_of;

    /// Direct evaluate-then-filter for every hypothetical solution
    fn brute_force_total(guess: &Digits, candidates: &CandidateSet) -> usize {
        candidates
            .iter()
            .map(|solution| {
                let report = FeedbackReport::evaluate(guess, solution.digits()).unwrap();
                filter_candidates(&report, candidates).unwrap().len()
            })
            .sum()
    }

    fn sample_candidates() -> CandidateSet {
        CandidateSet::from_numbers(
            [10007, 10009, 10037, 10039, 10061, 10067, 10069, 10079, 12347, 31121],
            5,
        )
    }

    #[test]
    fn matches_brute_force() {
        let candidates = sample_candidates();
        for guess in [10007, 10069, 12347, 31121, 99991, 11111] {
            let guess = digits_of(guess, 5);
            let metrics = calculate_metrics(&guess, &candidates).unwrap();
            assert_eq!(metrics.total_remaining, brute_force_total(&guess, &candidates));
        }
    }

    #[test]
    fn uninformative_guess_keeps_everything() {
        // 88888 shares no digit with any candidate: every solution leaves the whole set
        let candidates = sample_candidates();
        let metrics = calculate_metrics(&digits_of(88888, 5), &candidates).unwrap();

        assert_eq!(metrics.total_remaining, candidates.len() * candidates.len());
        assert_eq!(metrics.worst_case, candidates.len());
        assert_eq!(metrics.distinct_outcomes, 1);
        assert!((metrics.expected_remaining - candidates.len() as f64).abs() < f64::EPSILON);
    }

    #[test]
    fn bounds() {
        let candidates = sample_candidates();
        let n = candidates.len();
        for candidate in &candidates {
            let metrics = calculate_metrics(candidate.digits(), &candidates).unwrap();
            // Each solution survives its own feedback, so at least one remains per solution
            assert!(metrics.total_remaining >= n);
            assert!(metrics.total_remaining <= n * n);
            assert!(metrics.worst_case >= 1 && metrics.worst_case <= n);
            assert!(metrics.distinct_outcomes <= n);
        }
    }

    #[test]
    fn empty_candidates() {
        let candidates = CandidateSet::from_numbers([], 5);
        let metrics = calculate_metrics(&digits_of(12345, 5), &candidates).unwrap();
        assert_eq!(metrics, SimulationMetrics::EMPTY);
    }

    #[test]
    fn width_mismatch() {
        let candidates = sample_candidates();
        let result = calculate_total_remaining(&digits_of(1009, 4), &candidates);
        assert!(matches!(result, Err(EngineError::LengthMismatch { .. })));
    }

    #[test]
    fn group_counts_cover_all_candidates() {
        let candidates = sample_candidates();
        let groups = group_by_feedback(&digits_of(10069, 5), &candidates).unwrap();
        assert_eq!(groups.values().sum::<usize>(), candidates.len());
    }
}
