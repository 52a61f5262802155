//! Per-digit feedback and its evaluation
//!
//! Every digit of a guess is classified as:
//! - `Correct` (green): the solution has the same digit at that position
//! - `Present` (yellow): the digit occurs at some other position of the solution
//!   that is not itself matched exactly
//! - `Absent` (gray): otherwise
//!
//! Exact matches are settled first and are excluded from the `Present` scan.
//! There is no further multiplicity accounting: two guess positions may both
//! be reported `Present` on the strength of a single solution digit.

use super::digits::{Digits, MAX_DIGITS};
use super::error::EngineError;

/// Classification of one guess digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedbackKind {
    #[default]
    Absent,
    Present,
    Correct,
}

impl FeedbackKind {
    /// Parse the interactive symbol: `c`, `p` or `a` (case-sensitive)
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'c' => Some(Self::Correct),
            'p' => Some(Self::Present),
            'a' => Some(Self::Absent),
            _ => None,
        }
    }

    /// The interactive symbol for this kind
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'c',
            Self::Present => 'p',
            Self::Absent => 'a',
        }
    }

    /// Compact numeric code (0 = absent, 1 = present, 2 = correct)
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl TryFrom<u8> for FeedbackKind {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Present),
            2 => Ok(Self::Correct),
            other => Err(EngineError::InvalidFeedbackKind(other)),
        }
    }
}

/// Feedback for one position: the guessed digit and its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub digit: u8,
    pub kind: FeedbackKind,
}

impl Feedback {
    #[must_use]
    pub const fn new(digit: u8, kind: FeedbackKind) -> Self {
        Self { digit, kind }
    }
}

/// Feedback for every position of a guess
///
/// Stored inline (like [`Digits`]) so reports are `Copy` and can key hash maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackReport {
    entries: [Feedback; MAX_DIGITS],
    len: u8,
}

impl FeedbackReport {
    /// Evaluate `guess` against a hypothetical `solution`
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the two sequences differ in length.
    ///
    /// # Examples
    /// ```
    /// use primel_solver::core::{FeedbackKind, FeedbackReport, digits_of};
    ///
    /// let guess = digits_of(11234, 5);
    /// let solution = digits_of(15678, 5);
    /// let report = FeedbackReport::evaluate(&guess, &solution).unwrap();
    ///
    /// assert_eq!(report.symbols(), "caaaa");
    /// assert_eq!(report.get(0).kind, FeedbackKind::Correct);
    /// ```
    pub fn evaluate(guess: &Digits, solution: &Digits) -> Result<Self, EngineError> {
        if guess.len() != solution.len() {
            return Err(EngineError::LengthMismatch {
                expected: guess.len(),
                actual: solution.len(),
            });
        }

        let guess = guess.as_slice();
        let solution = solution.as_slice();

        // First pass: exact matches
        let mut correct = [false; MAX_DIGITS];
        for (slot, (g, s)) in correct.iter_mut().zip(guess.iter().zip(solution)) {
            *slot = g == s;
        }

        // Second pass: only solution positions not matched exactly count as "present"
        let mut entries = [Feedback::default(); MAX_DIGITS];
        for (i, &digit) in guess.iter().enumerate() {
            let kind = if correct[i] {
                FeedbackKind::Correct
            } else if solution
                .iter()
                .enumerate()
                .any(|(j, &s)| !correct[j] && s == digit)
            {
                FeedbackKind::Present
            } else {
                FeedbackKind::Absent
            };
            entries[i] = Feedback::new(digit, kind);
        }

        Ok(Self {
            entries,
            len: guess.len() as u8,
        })
    }

    /// Build a report for `guess` from one kind per position
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if `kinds` and `guess` differ in length.
    pub fn from_kinds(guess: &Digits, kinds: &[FeedbackKind]) -> Result<Self, EngineError> {
        if kinds.len() != guess.len() {
            return Err(EngineError::LengthMismatch {
                expected: guess.len(),
                actual: kinds.len(),
            });
        }

        let mut entries = [Feedback::default(); MAX_DIGITS];
        for ((slot, &digit), &kind) in entries.iter_mut().zip(guess.as_slice()).zip(kinds) {
            *slot = Feedback::new(digit, kind);
        }

        Ok(Self {
            entries,
            len: guess.len() as u8,
        })
    }

    /// Parse a symbol string such as `"cpaac"` for `guess`
    ///
    /// Returns `None` on a length mismatch or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use primel_solver::core::{FeedbackReport, digits_of};
    ///
    /// let guess = digits_of(12345, 5);
    /// let report = FeedbackReport::from_symbols(&guess, "cpaac").unwrap();
    /// assert_eq!(report.to_emoji(), "🟩🟨⬜⬜🟩");
    ///
    /// assert!(FeedbackReport::from_symbols(&guess, "cpa").is_none());
    /// assert!(FeedbackReport::from_symbols(&guess, "cpaaX").is_none());
    /// ```
    #[must_use]
    pub fn from_symbols(guess: &Digits, symbols: &str) -> Option<Self> {
        let kinds = symbols
            .trim()
            .chars()
            .map(FeedbackKind::from_symbol)
            .collect::<Option<Vec<_>>>()?;

        Self::from_kinds(guess, &kinds).ok()
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Feedback entries in position order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Feedback] {
        &self.entries[..self.len()]
    }

    /// Feedback at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Feedback {
        self.entries()[position]
    }

    /// The guessed digits this report describes
    #[must_use]
    pub fn guess(&self) -> Digits {
        let mut digits = [0u8; MAX_DIGITS];
        for (slot, entry) in digits.iter_mut().zip(self.entries()) {
            *slot = entry.digit;
        }
        Digits::from_slice(&digits[..self.len()])
    }

    /// Bit mask of positions marked `Correct` (bit `i` = position `i`)
    #[must_use]
    pub fn correct_positions(&self) -> u16 {
        self.entries()
            .iter()
            .enumerate()
            .filter(|(_, f)| f.kind == FeedbackKind::Correct)
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Count the positions with the given kind
    #[must_use]
    pub fn count(&self, kind: FeedbackKind) -> usize {
        self.entries().iter().filter(|f| f.kind == kind).count()
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.entries()
            .iter()
            .all(|f| f.kind == FeedbackKind::Correct)
    }

    /// Render as interactive symbols, e.g. `"cpaac"`
    #[must_use]
    pub fn symbols(&self) -> String {
        self.entries().iter().map(|f| f.kind.symbol()).collect()
    }

    /// Render as emoji squares, e.g. `"🟩🟨⬜⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.entries().iter().map(|f| f.kind.emoji()).collect()
    }
}
