//! Prime candidate universe
//!
//! Primel answers are the primes with exactly `width` decimal digits. The
//! universe is generated on startup with a sieve instead of being embedded.

mod sieve;

pub use sieve::{primes_in_range, sieve};

use crate::core::{CandidateSet, EngineError, Number};
use tracing::debug;

/// Default number of digits in a Primel puzzle
pub const DEFAULT_WIDTH: usize = 5;

/// Largest supported width (the sieve allocates one byte per number below `10^width`)
pub const MAX_WIDTH: usize = 7;

/// Half-open range `[from, to)` of numbers with exactly `width` digits
///
/// # Errors
/// Returns `EngineError::UnsupportedWidth` unless `1 <= width <= MAX_WIDTH`.
pub fn width_range(width: usize) -> Result<(Number, Number), EngineError> {
    if !(1..=MAX_WIDTH).contains(&width) {
        return Err(EngineError::UnsupportedWidth(width));
    }

    let to = (10 as Number).pow(width as u32);
    let from = if width == 1 { 0 } else { to / 10 };
    Ok((from, to))
}

/// All primes with exactly `width` digits, ascending
///
/// # Errors
/// Returns `EngineError::UnsupportedWidth` unless `1 <= width <= MAX_WIDTH`.
///
/// # Examples
/// ```
/// use primel_solver::primes::universe;
///
/// let primes = universe(5).unwrap();
/// assert_eq!(primes.len(), 8363);
/// assert_eq!(primes.numbers().first(), Some(&10007));
///
/// assert!(universe(0).is_err());
/// ```
pub fn universe(width: usize) -> Result<CandidateSet, EngineError> {
    let (from, to) = width_range(width)?;
    let primes = primes_in_range(from, to);
    debug!(width, count = primes.len(), "generated prime universe");
    Ok(CandidateSet::from_numbers(primes, width))
}
