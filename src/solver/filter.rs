//! Candidate filtering
//!
//! Narrows a candidate set to the numbers consistent with one feedback report:
//! 1. `Correct` at `i`: the candidate has the same digit at `i`
//! 2. `Present` at `i`: the digit occurs at some position other than `i` that
//!    is not a `Correct` position
//! 3. `Absent` at `i`: the digit occurs at no position outside the `Correct`
//!    positions
//!
//! A digit reported `Absent` at one position and `Correct` elsewhere is
//! therefore still allowed at the `Correct` position only.

use crate::core::{CandidateSet, Digits, EngineError, FeedbackKind, FeedbackReport};
use tracing::{debug, warn};

impl FeedbackReport {
    /// Check whether a candidate is consistent with this report
    ///
    /// Both sequences must have the same length; extra candidate positions are
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use primel_solver::core::{FeedbackReport, digits_of};
    ///
    /// let guess = digits_of(12345, 5);
    /// let report = FeedbackReport::from_symbols(&guess, "caaaa").unwrap();
    ///
    /// assert!(report.admits(&digits_of(16789, 5)));
    /// assert!(!report.admits(&digits_of(26789, 5))); // wrong first digit
    /// assert!(!report.admits(&digits_of(16782, 5))); // contains absent 2
    /// ```
    #[must_use]
    pub fn admits(&self, candidate: &Digits) -> bool {
        let correct = self.correct_positions();
        let is_open = |j: usize| correct & (1 << j) == 0;
        let digits = candidate.as_slice();

        // Correct positions first: they decide which positions the other rules may inspect
        let exact = self
            .entries()
            .iter()
            .zip(digits)
            .all(|(f, &d)| f.kind != FeedbackKind::Correct || f.digit == d);
        if !exact {
            return false;
        }

        self.entries().iter().enumerate().all(|(i, f)| match f.kind {
            FeedbackKind::Correct => true,
            FeedbackKind::Present => digits
                .iter()
                .enumerate()
                .any(|(j, &d)| d == f.digit && j != i && is_open(j)),
            FeedbackKind::Absent => !digits
                .iter()
                .enumerate()
                .any(|(j, &d)| d == f.digit && is_open(j)),
        })
    }
}

/// Return the subset of `candidates` consistent with `report`
///
/// The input set is left untouched; order is preserved.
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if the report width differs from the
/// candidate width.
///
/// # Examples
/// ```
/// use primel_solver::core::{CandidateSet, FeedbackReport, digits_of};
/// use primel_solver::solver::filter_candidates;
///
/// let candidates = CandidateSet::from_numbers([10007, 10009, 10037, 12347], 5);
/// let report = FeedbackReport::evaluate(&digits_of(10007, 5), &digits_of(10009, 5)).unwrap();
///
/// let narrowed = filter_candidates(&report, &candidates).unwrap();
/// assert_eq!(narrowed.numbers(), vec![10009]);
/// assert_eq!(candidates.len(), 4);
/// ```
pub fn filter_candidates(
    report: &FeedbackReport,
    candidates: &CandidateSet,
) -> Result<CandidateSet, EngineError> {
    if report.len() != candidates.width() {
        return Err(EngineError::LengthMismatch {
            expected: candidates.width(),
            actual: report.len(),
        });
    }

    let kept: Vec<_> = candidates
        .iter()
        .filter(|c| report.admits(c.digits()))
        .copied()
        .collect();

    Ok(CandidateSet::from_candidates(kept, candidates.width()))
}

/// [`filter_candidates`] with round-level logging
///
/// # Errors
/// Same as [`filter_candidates`].
pub fn narrow(
    report: &FeedbackReport,
    candidates: &CandidateSet,
) -> Result<CandidateSet, EngineError> {
    let narrowed = filter_candidates(report, candidates)?;

    debug!(
        feedback = %report.symbols(),
        before = candidates.len(),
        after = narrowed.len(),
        "filtered candidates"
    );
    if narrowed.is_empty() {
        warn!(feedback = %report.symbols(), "feedback eliminated every candidate");
    }

    Ok(narrowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::digits_of;
    use crate::primes::universe;

    fn report(guess: u32, symbols: &str) -> FeedbackReport {
        FeedbackReport::from_symbols(&digits_of(guess, 5), symbols).unwrap()
    }

    fn evaluate(guess: u32, solution: u32) -> FeedbackReport {
        FeedbackReport::evaluate(&digits_of(guess, 5), &digits_of(solution, 5)).unwrap()
    }

    #[test]
    fn correct_keeps_matching_digit() {
        let candidates = CandidateSet::from_numbers([10007, 20007, 30011, 10099], 5);
        let narrowed = filter_candidates(&report(19999, "caaaa"), &candidates).unwrap();
        // 9 is absent everywhere except the correct position 0
        assert_eq!(narrowed.numbers(), vec![10007]);
    }

    #[test]
    fn present_requires_other_open_position() {
        let r = report(12345, "paaaa");
        assert!(r.admits(&digits_of(67891, 5)));
        assert!(!r.admits(&digits_of(16789, 5))); // only at the guessed position
        assert!(!r.admits(&digits_of(67890, 5))); // missing entirely
    }

    #[test]
    fn present_ignores_correct_positions() {
        // 1 correct at position 0 and present at position 1: needs a second 1 elsewhere
        let r = report(11000, "cpccc");
        assert!(!r.admits(&digits_of(19000, 5)));
        assert!(!r.admits(&digits_of(11000, 5)));
        let r = report(11234, "cpaaa");
        assert!(r.admits(&digits_of(15168, 5)));
        assert!(!r.admits(&digits_of(15678, 5)));
    }

    #[test]
    fn absent_tolerated_at_correct_positions() {
        // Second 1 absent but the first is correct: 1 may only appear at position 0
        let r = report(11234, "caaaa");
        assert!(r.admits(&digits_of(15678, 5)));
        assert!(!r.admits(&digits_of(15671, 5)));
        assert!(!r.admits(&digits_of(11678, 5)));
    }

    #[test]
    fn absent_rejects_digit_at_own_position() {
        let r = report(12345, "acccc");
        assert!(!r.admits(&digits_of(12345, 5)));
        assert!(r.admits(&digits_of(92345, 5)));
    }

    #[test]
    fn solution_always_survives_its_own_feedback() {
        let candidates = universe(5).unwrap();
        let guesses = [10007, 11113, 12347, 99991, 33331];
        for guess in guesses {
            for solution in candidates.iter().step_by(211) {
                let r = evaluate(guess, solution.number());
                let narrowed = filter_candidates(&r, &candidates).unwrap();
                assert!(
                    narrowed.contains(solution.number()),
                    "{} eliminated by guess {guess}",
                    solution.number()
                );
            }
        }
    }

    #[test]
    fn filtering_is_idempotent_and_monotone() {
        let candidates = universe(5).unwrap();
        for (guess, solution) in [(12345, 10007), (11113, 31121), (70001, 10007)] {
            let r = evaluate(guess, solution);
            let once = filter_candidates(&r, &candidates).unwrap();
            let twice = filter_candidates(&r, &once).unwrap();
            assert_eq!(once, twice);
            assert!(once.len() <= candidates.len());
        }
    }

    #[test]
    fn input_not_modified() {
        let candidates = universe(5).unwrap();
        let snapshot = candidates.clone();
        let _ = filter_candidates(&report(12345, "aaaaa"), &candidates).unwrap();
        assert_eq!(candidates, snapshot);
    }

    #[test]
    fn repeated_digits_can_admit_the_guess_itself() {
        let candidates = CandidateSet::from_numbers([11223, 22113, 12345], 5);
        let filtered = filter_candidates(&evaluate(11223, 22113), &candidates).unwrap();
        assert_eq!(filtered.numbers(), vec![11223, 22113]);
    }

    #[test]
    fn preserves_order() {
        let candidates = CandidateSet::from_numbers([99991, 10007, 50023, 10009], 5);
        let narrowed = filter_candidates(&report(66666, "aaaaa"), &candidates).unwrap();
        assert_eq!(narrowed.numbers(), vec![99991, 10007, 50023, 10009]);
    }

    #[test]
    fn correct_feedback_shrinks_unless_unanimous() {
        let candidates = universe(5).unwrap();
        let r = report(10007, "caaaa");
        let narrowed = filter_candidates(&r, &candidates).unwrap();
        assert!(narrowed.len() < candidates.len());
        assert!(narrowed.iter().all(|c| c.digits().digit_at(0) == 1));

        // Candidates that already agree on the correct digit are not removed by it
        let unanimous = CandidateSet::from_numbers([10007, 12343, 15551], 5);
        let kept = filter_candidates(&report(19999, "caaaa"), &unanimous).unwrap();
        assert_eq!(kept.len(), unanimous.len());
    }

    #[test]
    fn contradictory_feedback_empties_set() {
        let candidates = universe(5).unwrap();
        // Even last digit cannot be correct for a five-digit prime
        let narrowed = filter_candidates(&report(11112, "aaaac"), &candidates).unwrap();
        assert!(narrowed.is_empty());
    }

    #[test]
    fn width_mismatch() {
        let candidates = CandidateSet::from_numbers([1009, 1013], 4);
        let result = filter_candidates(&report(12345, "aaaaa"), &candidates);
        assert_eq!(
            result,
            Err(EngineError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn narrow_matches_filter() {
        let candidates = universe(5).unwrap();
        let r = evaluate(12345, 10007);
        assert_eq!(
            narrow(&r, &candidates).unwrap(),
            filter_candidates(&r, &candidates).unwrap()
        );
    }
}
