//! Per-position digit frequencies
//!
//! Counts how often each digit occurs at each position across the current
//! candidates. A guess scores the sum of its digits' counts at their positions.

use crate::core::{CandidateSet, Digits};
use rustc_hash::FxHashMap;

/// Digit occurrence counts for each position of a candidate set
#[derive(Debug, Clone, Default)]
pub struct DigitFrequencies {
    per_position: Vec<FxHashMap<u8, usize>>,
}

impl DigitFrequencies {
    /// Tally digit occurrences across `candidates`
    ///
    /// # Examples
    /// ```
    /// use primel_solver::core::CandidateSet;
    /// use primel_solver::solver::frequency::DigitFrequencies;
    ///
    /// let candidates = CandidateSet::from_numbers([10007, 10009, 20011], 5);
    /// let frequencies = DigitFrequencies::from_candidates(&candidates);
    ///
    /// assert_eq!(frequencies.count(0, 1), 2);
    /// assert_eq!(frequencies.count(0, 2), 1);
    /// assert_eq!(frequencies.count(4, 3), 0);
    /// ```
    #[must_use]
    pub fn from_candidates(candidates: &CandidateSet) -> Self {
        let mut per_position = vec![FxHashMap::default(); candidates.width()];

        for candidate in candidates {
            for (counts, &digit) in per_position.iter_mut().zip(candidate.digits().as_slice()) {
                *counts.entry(digit).or_insert(0) += 1;
            }
        }

        Self { per_position }
    }

    /// Number of positions tallied
    #[must_use]
    pub fn width(&self) -> usize {
        self.per_position.len()
    }

    /// Occurrences of `digit` at `position` (0 for positions out of range)
    #[must_use]
    pub fn count(&self, position: usize, digit: u8) -> usize {
        self.per_position
            .get(position)
            .and_then(|counts| counts.get(&digit))
            .copied()
            .unwrap_or(0)
    }

    /// Sum over positions of the count of the guess digit at that position
    ///
    /// Higher is better.
    #[must_use]
    pub fn score(&self, guess: &Digits) -> usize {
        guess
            .as_slice()
            .iter()
            .enumerate()
            .map(|(position, &digit)| self.count(position, digit))
            .sum()
    }

    /// The most common digit at `position`, smallest digit on ties
    #[must_use]
    pub fn most_common(&self, position: usize) -> Option<(u8, usize)> {
        self.per_position.get(position).and_then(|counts| {
            counts
                .iter()
                .map(|(&digit, &count)| (digit, count))
                .max_by(|(d1, c1), (d2, c2)| c1.cmp(c2).then(d2.cmp(d1)))
        })
    }
}
