//! Frequency-based guess selection
//!
//! Selects the candidate whose digits are most common at their positions.

use super::calculator::DigitFrequencies;
use crate::core::{Candidate, CandidateSet};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Select best guess by maximizing the frequency score
///
/// Returns the best candidate and its score, or `None` if there are no
/// candidates. Ties go to the candidate seen first.
///
/// # Examples
/// ```
/// use primel_solver::core::CandidateSet;
/// use primel_solver::solver::frequency::select_best_guess;
///
/// let candidates = CandidateSet::from_numbers([20011, 10007, 10009], 5);
/// let (best, score) = select_best_guess(&candidates).unwrap();
///
/// assert_eq!(best.number(), 10007); // ties with 10009, seen first
/// assert_eq!(score, 11);
/// ```
#[must_use]
pub fn select_best_guess(candidates: &CandidateSet) -> Option<(&Candidate, usize)> {
    let frequencies = DigitFrequencies::from_candidates(candidates);

    // rayon's min_by_key keeps the first of equal elements
    candidates
        .as_slice()
        .par_iter()
        .map(|candidate| (candidate, frequencies.score(candidate.digits())))
        .min_by_key(|&(_, score)| Reverse(score))
}
