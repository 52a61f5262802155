//! Sieve of Eratosthenes

use crate::core::Number;

/// All primes strictly below `max`, ascending
///
/// # Examples
/// ```
/// use primel_solver::primes::sieve;
///
/// assert_eq!(sieve(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert!(sieve(2).is_empty());
/// ```
#[must_use]
pub fn sieve(max: Number) -> Vec<Number> {
    if max < 2 {
        return Vec::new();
    }

    let max = max as usize;
    let mut is_prime = vec![true; max];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i < max {
        if is_prime[i] {
            for multiple in (i * i..max).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .map(|(n, _)| n as Number)
        .collect()
}

/// All primes in `[from, to)`, ascending
///
/// The sieve is sized to `to`; an empty or inverted range yields no primes.
///
/// # Examples
/// ```
/// use primel_solver::primes::primes_in_range;
///
/// assert_eq!(primes_in_range(10, 30), vec![11, 13, 17, 19, 23, 29]);
/// assert!(primes_in_range(0, 1).is_empty());
/// ```
#[must_use]
pub fn primes_in_range(from: Number, to: Number) -> Vec<Number> {
    if from >= to {
        return Vec::new();
    }

    sieve(to).into_iter().filter(|&p| p >= from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prime_naive(n: Number) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn small_limits_are_empty() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
        assert!(sieve(2).is_empty());
        assert_eq!(sieve(3), vec![2]);
    }

    #[test]
    fn sieve_matches_trial_division() {
        for to in 0..600 {
            let expected: Vec<Number> = (0..to).filter(|&n| is_prime_naive(n)).collect();
            assert_eq!(primes_in_range(0, to), expected, "mismatch below {to}");
        }
    }

    #[test]
    fn squares_of_primes_excluded() {
        let primes = sieve(1000);
        for square in [4, 9, 25, 49, 121, 169, 289, 361, 529, 841, 961] {
            assert!(!primes.contains(&square), "{square} is not prime");
        }
    }

    #[test]
    fn ascending_without_duplicates() {
        let primes = primes_in_range(0, 100_000);
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn five_digit_prime_count() {
        let primes = primes_in_range(10_000, 100_000);
        assert_eq!(primes.len(), 8363);
        assert_eq!(primes.first(), Some(&10007));
        assert_eq!(primes.last(), Some(&99991));
    }

    #[test]
    fn range_is_half_open() {
        assert_eq!(primes_in_range(7, 13), vec![7, 11]);
        assert_eq!(primes_in_range(11, 12), vec![11]);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(primes_in_range(100, 50).is_empty());
        assert!(primes_in_range(50, 50).is_empty());
    }
}
