//! Digit codec
//!
//! Converts numbers into fixed-width digit sequences and back. Every consumer
//! (feedback evaluation, candidate filtering, scoring, display) goes through
//! this one implementation so the position convention never drifts.
//!
//! Positions are numbered from the most significant digit: position 0 is the
//! leftmost digit of the zero-padded decimal rendering.

use std::fmt;
use thiserror::Error;

/// A candidate or guess value
pub type Number = u32;

/// Largest digit count a [`Digits`] can hold (`u32::MAX` has ten digits)
pub const MAX_DIGITS: usize = 10;

/// An ordered, fixed-width sequence of decimal digits
///
/// Stored inline so that digit sequences are `Copy` and can be compared and
/// hashed without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits {
    digits: [u8; MAX_DIGITS],
    len: u8,
}

/// Error type for user-entered numbers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitsError {
    #[error("number must be exactly {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("number must contain only the digits 0-9")]
    NonDigit,
}

/// Extract `count` digits of `number`, most significant first
///
/// Digits are produced by repeated division by 10, so a number with fewer than
/// `count` significant digits is zero-padded in the high positions, and any
/// digits above `count` are dropped.
///
/// # Panics
/// Panics if `count > MAX_DIGITS`.
///
/// # Examples
/// ```
/// use primel_solver::core::digits_of;
///
/// assert_eq!(digits_of(12345, 5).as_slice(), &[1, 2, 3, 4, 5]);
/// assert_eq!(digits_of(42, 5).as_slice(), &[0, 0, 0, 4, 2]);
/// assert!(digits_of(7, 0).is_empty());
/// ```
#[must_use]
pub fn digits_of(number: Number, count: usize) -> Digits {
    assert!(
        count <= MAX_DIGITS,
        "digit count {count} exceeds maximum of {MAX_DIGITS}"
    );

    let mut digits = [0u8; MAX_DIGITS];
    let mut rest = number;
    for slot in digits[..count].iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }

    Digits {
        digits,
        len: count as u8,
    }
}

impl Digits {
    /// Parse a digit string such as `"10007"`
    ///
    /// # Errors
    /// Returns `DigitsError` if the text is not exactly `width` ASCII digits.
    ///
    /// # Examples
    /// ```
    /// use primel_solver::core::Digits;
    ///
    /// let digits = Digits::parse("10007", 5).unwrap();
    /// assert_eq!(digits.to_number(), Some(10007));
    ///
    /// assert!(Digits::parse("1000", 5).is_err());
    /// assert!(Digits::parse("1o007", 5).is_err());
    /// ```
    pub fn parse(text: &str, width: usize) -> Result<Self, DigitsError> {
        let text = text.trim();

        if text.chars().count() != width || width > MAX_DIGITS {
            return Err(DigitsError::InvalidLength {
                expected: width,
                actual: text.chars().count(),
            });
        }

        let mut digits = [0u8; MAX_DIGITS];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            *slot = ch.to_digit(10).ok_or(DigitsError::NonDigit)? as u8;
        }

        Ok(Self {
            digits,
            len: width as u8,
        })
    }

    /// Copy an already-validated digit slice
    pub(crate) fn from_slice(slice: &[u8]) -> Self {
        let mut digits = [0u8; MAX_DIGITS];
        digits[..slice.len()].copy_from_slice(slice);
        Self {
            digits,
            len: slice.len() as u8,
        }
    }

    /// Number of digit positions
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

    /// The digits as a slice, most significant first
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// Get the digit at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> u8 {
        self.as_slice()[position]
    }

    /// Check if the digit appears at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.as_slice().contains(&digit)
    }

    /// Rebuild the number with Horner's method
    ///
    /// Returns `None` if the value does not fit in a [`Number`].
    #[must_use]
    pub fn to_number(&self) -> Option<Number> {
        self.as_slice().iter().try_fold(0 as Number, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(Number::from(digit))
        })
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.as_slice() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
