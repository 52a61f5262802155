//! Guess selection strategies
//!
//! Defines the Strategy trait, the typed `Score` it reports and the concrete
//! implementations.

use super::{frequency, simulation};
use crate::core::{Candidate, CandidateSet, Digits, EngineError};
use std::fmt;

/// Score of a guess under one heuristic
///
/// The two heuristics rank in opposite directions, so the kind travels with
/// the value and scores of different kinds never compare as better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Summed per-position digit frequency (higher is better)
    Frequency(usize),
    /// Summed remaining-candidate count over all simulated solutions (lower is better)
    Remaining(usize),
}

impl Score {
    /// The raw value, without its direction
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::Frequency(v) | Self::Remaining(v) => v,
        }
    }

    /// Check if this score ranks strictly ahead of `other`
    ///
    /// Always `false` when the kinds differ.
    ///
    /// # Examples
    /// ```
    /// use primel_solver::solver::Score;
    ///
    /// assert!(Score::Frequency(10).is_better_than(Score::Frequency(7)));
    /// assert!(Score::Remaining(7).is_better_than(Score::Remaining(10)));
    /// assert!(!Score::Remaining(1).is_better_than(Score::Frequency(100)));
    /// ```
    #[must_use]
    pub const fn is_better_than(self, other: Self) -> bool {
        match (self, other) {
            (Self::Frequency(a), Self::Frequency(b)) => a > b,
            (Self::Remaining(a), Self::Remaining(b)) => a < b,
            _ => false,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency score",
            Self::Remaining(_) => "total remaining",
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.value())
    }
}

/// A strategy for selecting the best guess from the remaining candidates
///
/// Candidate sets are only read, so implementations must be shareable across
/// worker threads.
pub trait Strategy: Sync {
    /// Short name used on the command line
    fn name(&self) -> &'static str;

    /// Score `guess` against the current candidates
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the guess width differs from
    /// the candidate width.
    fn score(&self, guess: &Digits, candidates: &CandidateSet) -> Result<Score, EngineError>;

    /// Select the best guess among the candidates
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateSet` if there are no candidates.
    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
    ) -> Result<(&'a Candidate, Score), EngineError>;
}

fn ensure_width(guess: &Digits, candidates: &CandidateSet) -> Result<(), EngineError> {
    if guess.len() == candidates.width() {
        Ok(())
    } else {
        Err(EngineError::LengthMismatch {
            expected: candidates.width(),
            actual: guess.len(),
        })
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Per-position digit frequency (default)
    Frequency(FrequencyStrategy),
    /// Simulate every candidate as the solution
    Simulation(SimulationStrategy),
    /// Frequency for large sets, simulation for small ones
    Hybrid(HybridStrategy),
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 3] = ["frequency", "simulation", "hybrid"];

    /// Create strategy from name string
    ///
    /// Returns `None` if the name is not one of [`StrategyType::NAMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "frequency" => Some(Self::Frequency(FrequencyStrategy)),
            "simulation" => Some(Self::Simulation(SimulationStrategy)),
            "hybrid" => Some(Self::Hybrid(HybridStrategy::default())),
            _ => None,
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Frequency(s) => s.name(),
            Self::Simulation(s) => s.name(),
            Self::Hybrid(s) => s.name(),
        }
    }

    fn score(&self, guess: &Digits, candidates: &CandidateSet) -> Result<Score, EngineError> {
        match self {
            Self::Frequency(s) => s.score(guess, candidates),
            Self::Simulation(s) => s.score(guess, candidates),
            Self::Hybrid(s) => s.score(guess, candidates),
        }
    }

    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
    ) -> Result<(&'a Candidate, Score), EngineError> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates),
            Self::Simulation(s) => s.select_guess(candidates),
            Self::Hybrid(s) => s.select_guess(candidates),
        }
    }
}

/// Frequency heuristic strategy
///
/// Picks the candidate whose digits are most common at their positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn score(&self, guess: &Digits, candidates: &CandidateSet) -> Result<Score, EngineError> {
        ensure_width(guess, candidates)?;
        let frequencies = frequency::DigitFrequencies::from_candidates(candidates);
        Ok(Score::Frequency(frequencies.score(guess)))
    }

    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
    ) -> Result<(&'a Candidate, Score), EngineError> {
        frequency::select_best_guess(candidates)
            .map(|(best, score)| (best, Score::Frequency(score)))
            .ok_or(EngineError::EmptyCandidateSet)
    }
}

/// Simulation heuristic strategy
///
/// Picks the candidate that minimizes the summed remaining-candidate count.
/// Quadratic in the number of candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationStrategy;

impl Strategy for SimulationStrategy {
    fn name(&self) -> &'static str {
        "simulation"
    }

    fn score(&self, guess: &Digits, candidates: &CandidateSet) -> Result<Score, EngineError> {
        ensure_width(guess, candidates)?;
        simulation::calculate_total_remaining(guess, candidates).map(Score::Remaining)
    }

    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
    ) -> Result<(&'a Candidate, Score), EngineError> {
        simulation::select_best_guess(candidates)?
            .map(|(best, metrics)| (best, Score::Remaining(metrics.total_remaining)))
            .ok_or(EngineError::EmptyCandidateSet)
    }
}

/// Hybrid strategy combining both heuristics
///
/// Uses the frequency heuristic while many candidates remain and switches to
/// simulation once the set is small enough to afford it.
#[derive(Debug, Clone, Copy)]
pub struct HybridStrategy {
    /// Switch to simulation when candidates <= this threshold
    pub simulation_threshold: usize,
}

impl HybridStrategy {
    /// Create a new hybrid strategy
    ///
    /// # Parameters
    /// - `simulation_threshold`: Switch to simulation when candidates <= this value (default: 250)
    #[must_use]
    pub const fn new(simulation_threshold: usize) -> Self {
        Self {
            simulation_threshold,
        }
    }

    fn uses_simulation(&self, candidates: &CandidateSet) -> bool {
        candidates.len() <= self.simulation_threshold
    }
}

impl Default for HybridStrategy {
    fn default() -> Self {
        Self::new(250)
    }
}

impl Strategy for HybridStrategy {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn score(&self, guess: &Digits, candidates: &CandidateSet) -> Result<Score, EngineError> {
        if self.uses_simulation(candidates) {
            SimulationStrategy.score(guess, candidates)
        } else {
            FrequencyStrategy.score(guess, candidates)
        }
    }

    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
    ) -> Result<(&'a Candidate, Score), EngineError> {
        if self.uses_simulation(candidates) {
            SimulationStrategy.select_guess(candidates)
        } else {
            FrequencyStrategy.select_guess(candidates)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::digits_of;

    fn setup_candidates() -> CandidateSet {
        CandidateSet::from_numbers([10007, 10009, 10037, 10039, 12347], 5)
    }

    #[test]
    fn frequency_strategy_selects_candidate() {
        let candidates = setup_candidates();
        let (best, score) = FrequencyStrategy.select_guess(&candidates).unwrap();

        assert!(candidates.contains(best.number()));
        assert!(matches!(score, Score::Frequency(_)));
        assert_eq!(FrequencyStrategy.score(best.digits(), &candidates), Ok(score));
    }

    #[test]
    fn simulation_strategy_selects_candidate() {
        let candidates = setup_candidates();
        let (best, score) = SimulationStrategy.select_guess(&candidates).unwrap();

        assert!(candidates.contains(best.number()));
        assert!(matches!(score, Score::Remaining(_)));
        assert_eq!(SimulationStrategy.score(best.digits(), &candidates), Ok(score));
    }

    #[test]
    fn empty_set_is_an_error() {
        let empty = CandidateSet::from_numbers([], 5);
        assert_eq!(
            FrequencyStrategy.select_guess(&empty),
            Err(EngineError::EmptyCandidateSet)
        );
        assert_eq!(
            SimulationStrategy.select_guess(&empty),
            Err(EngineError::EmptyCandidateSet)
        );
        assert_eq!(
            StrategyType::default().select_guess(&empty),
            Err(EngineError::EmptyCandidateSet)
        );
    }

    #[test]
    fn score_width_checked() {
        let candidates = setup_candidates();
        let short = digits_of(1009, 4);
        assert!(matches!(
            FrequencyStrategy.score(&short, &candidates),
            Err(EngineError::LengthMismatch { .. })
        ));
        assert!(matches!(
            SimulationStrategy.score(&short, &candidates),
            Err(EngineError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn hybrid_uses_frequency_for_many_candidates() {
        let candidates = setup_candidates();
        let strategy = HybridStrategy::new(2);
        let (_, score) = strategy.select_guess(&candidates).unwrap();
        assert!(matches!(score, Score::Frequency(_)));
    }

    #[test]
    fn hybrid_uses_simulation_for_few_candidates() {
        let candidates = setup_candidates();
        let strategy = HybridStrategy::new(5);
        let (_, score) = strategy.select_guess(&candidates).unwrap();
        assert!(matches!(score, Score::Remaining(_)));
    }

    #[test]
    fn hybrid_default_threshold() {
        assert_eq!(HybridStrategy::default().simulation_threshold, 250);
    }

    #[test]
    fn from_name() {
        for name in StrategyType::NAMES {
            let strategy = StrategyType::from_name(name).unwrap();
            assert_eq!(strategy.name(), name);
        }
        assert!(StrategyType::from_name("entropy").is_none());
        assert!(StrategyType::from_name("Frequency").is_none());
    }

    #[test]
    fn score_directions_not_conflated() {
        assert!(Score::Frequency(5).is_better_than(Score::Frequency(4)));
        assert!(!Score::Frequency(4).is_better_than(Score::Frequency(4)));
        assert!(Score::Remaining(4).is_better_than(Score::Remaining(5)));
        assert!(!Score::Frequency(5).is_better_than(Score::Remaining(4)));
        assert!(!Score::Remaining(4).is_better_than(Score::Frequency(5)));
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::Frequency(42).to_string(), "frequency score 42");
        assert_eq!(Score::Remaining(7).to_string(), "total remaining 7");
    }
}
