//! Guess analysis command
//!
//! Scores a single guess against a candidate set with both heuristics.

use crate::core::{CandidateSet, Digits, Number};
use crate::solver::frequency::{self, DigitFrequencies};
use crate::solver::simulation::{SimulationMetrics, calculate_metrics};
use anyhow::{Context, Result};

/// How common the guess digit is at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionStat {
    pub digit: u8,
    /// Candidates with `digit` at this position
    pub count: usize,
    /// Most common digit at this position and its count
    pub most_common: Option<(u8, usize)>,
}

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub number: Number,
    pub width: usize,
    pub total_candidates: usize,
    /// Whether the guess itself could be the solution
    pub is_candidate: bool,
    pub frequency_score: usize,
    /// Frequency score of the frequency heuristic's own pick
    pub best_frequency_score: usize,
    pub positions: Vec<PositionStat>,
    pub simulation: SimulationMetrics,
}

/// Analyze `text` as a guess against `candidates`
///
/// The guess may be any number of the right width; it does not have to be a
/// candidate.
///
/// # Errors
///
/// Returns an error if the text is not exactly `candidates.width()` digits.
pub fn analyze_number(text: &str, candidates: &CandidateSet) -> Result<AnalysisResult> {
    let width = candidates.width();
    let guess = Digits::parse(text, width).with_context(|| format!("invalid guess '{text}'"))?;
    let number = guess
        .to_number()
        .context("guess does not fit in a number")?;

    let frequencies = DigitFrequencies::from_candidates(candidates);
    let best_frequency_score = frequency::select_best_guess(candidates).map_or(0, |(_, s)| s);
    let simulation = calculate_metrics(&guess, candidates)?;

    Ok(AnalysisResult {
        number,
        width,
        total_candidates: candidates.len(),
        is_candidate: candidates.contains(number),
        frequency_score: frequencies.score(&guess),
        best_frequency_score,
        positions: position_stats(&guess, &frequencies),
        simulation,
    })
}

fn position_stats(guess: &Digits, frequencies: &DigitFrequencies) -> Vec<PositionStat> {
    guess
        .as_slice()
        .iter()
        .enumerate()
        .map(|(position, &digit)| PositionStat {
            digit,
            count: frequencies.count(position, digit),
            most_common: frequencies.most_common(position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::universe;

    #[test]
    fn analyze_candidate() {
        let candidates = CandidateSet::from_numbers([10007, 10009, 10037], 5);
        let result = analyze_number("10007", &candidates).unwrap();

        assert_eq!(result.number, 10007);
        assert!(result.is_candidate);
        assert_eq!(result.total_candidates, 3);
        // 1:3 + 0:3 + 0:3 + 0:2 + 7:2
        assert_eq!(result.frequency_score, 13);
        assert!(result.frequency_score <= result.best_frequency_score);
        assert_eq!(result.positions.len(), 5);
        assert_eq!(result.positions[3].count, 2);
        assert_eq!(result.positions[0].most_common, Some((1, 3)));
    }

    #[test]
    fn analyze_non_candidate() {
        let candidates = universe(5).unwrap();
        let result = analyze_number("12345", &candidates).unwrap();

        assert!(!result.is_candidate);
        assert_eq!(result.total_candidates, 8363);
        assert!(result.simulation.total_remaining <= 8363 * 8363);
        assert!(result.simulation.worst_case <= 8363);
        assert!(result.simulation.distinct_outcomes > 1);
    }

    #[test]
    fn analyze_keeps_leading_zero() {
        let candidates = universe(2).unwrap();
        let result = analyze_number("07", &candidates).unwrap();
        assert_eq!(result.number, 7);
        assert!(!result.is_candidate);
        assert_eq!(result.positions[0].digit, 0);
    }

    #[test]
    fn analyze_invalid_guess() {
        let candidates = CandidateSet::from_numbers([10007], 5);
        assert!(analyze_number("1007", &candidates).is_err());
        assert!(analyze_number("1000x", &candidates).is_err());
    }
}
