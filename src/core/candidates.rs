//! Candidate sets
//!
//! A `CandidateSet` is an immutable snapshot of the numbers still consistent
//! with the feedback seen so far. Narrowing produces a new set; an existing
//! set is never modified, so it can be shared freely across worker threads.

use super::digits::{Digits, Number, digits_of};
use rustc_hash::FxHashSet;

/// A number together with its precomputed digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    number: Number,
    digits: Digits,
}

impl Candidate {
    /// Encode `number` as a `width`-digit candidate
    #[must_use]
    pub fn new(number: Number, width: usize) -> Self {
        Self {
            number,
            digits: digits_of(number, width),
        }
    }

    #[inline]
    #[must_use]
    pub const fn number(&self) -> Number {
        self.number
    }

    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &Digits {
        &self.digits
    }
}

/// Ordered set of unique candidates sharing one digit width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    width: usize,
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Build a set from numbers, keeping the first occurrence of duplicates
    ///
    /// # Examples
    /// ```
    /// use primel_solver::core::CandidateSet;
    ///
    /// let set = CandidateSet::from_numbers([10007, 10009, 10007], 5);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.numbers(), vec![10007, 10009]);
    /// ```
    #[must_use]
    pub fn from_numbers(numbers: impl IntoIterator<Item = Number>, width: usize) -> Self {
        let mut seen = FxHashSet::default();
        let candidates = numbers
            .into_iter()
            .filter(|&n| seen.insert(n))
            .map(|n| Candidate::new(n, width))
            .collect();

        Self { width, candidates }
    }

    /// Build a set from candidates already known to be unique and `width` wide
    pub(crate) const fn from_candidates(candidates: Vec<Candidate>, width: usize) -> Self {
        Self { width, candidates }
    }

    /// Digit width shared by every candidate
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// The candidate numbers in iteration order
    #[must_use]
    pub fn numbers(&self) -> Vec<Number> {
        self.candidates.iter().map(Candidate::number).collect()
    }

    /// Index of `number` in iteration order
    #[must_use]
    pub fn position(&self, number: Number) -> Option<usize> {
        self.candidates.iter().position(|c| c.number == number)
    }

    #[must_use]
    pub fn contains(&self, number: Number) -> bool {
        self.position(number).is_some()
    }

    /// Look up the candidate for `number`
    #[must_use]
    pub fn get(&self, number: Number) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.number == number)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
