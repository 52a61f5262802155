//! Main solver interface

use super::filter::narrow;
use super::strategy::{Score, Strategy};
use crate::core::{Candidate, CandidateSet, Digits, EngineError, FeedbackReport};
use tracing::info;

/// Outcome of one round of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// The guess the feedback was given for
    pub guess: Digits,
    /// The feedback received
    pub report: FeedbackReport,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl RoundSummary {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.report.is_solved()
    }

    /// Candidates eliminated this round
    #[must_use]
    pub const fn eliminated(&self) -> usize {
        self.candidates_before - self.candidates_after
    }
}

/// Solving session over one candidate universe
///
/// Holds the current candidate set and replaces it with a narrowed snapshot
/// each round. Earlier snapshots are kept so rounds can be undone.
///
/// # Examples
/// ```
/// use primel_solver::core::{CandidateSet, FeedbackReport, digits_of};
/// use primel_solver::solver::{FrequencyStrategy, Solver};
///
/// let universe = CandidateSet::from_numbers([10007, 10009, 10037, 10039], 5);
/// let mut solver = Solver::new(FrequencyStrategy, universe);
///
/// let guess = *solver.next_guess().unwrap().0.digits();
/// let report = FeedbackReport::evaluate(&guess, &digits_of(10039, 5)).unwrap();
/// let round = solver.apply_feedback(&report).unwrap();
///
/// assert!(round.candidates_after < round.candidates_before);
/// assert!(solver.candidates().contains(10039));
/// ```
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy> {
    strategy: S,
    universe: CandidateSet,
    current: CandidateSet,
    snapshots: Vec<CandidateSet>,
    history: Vec<RoundSummary>,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver starting from the whole universe
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `universe`: Every possible solution
    #[must_use]
    pub fn new(strategy: S, universe: CandidateSet) -> Self {
        Self {
            strategy,
            current: universe.clone(),
            universe,
            snapshots: Vec::new(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The full starting candidate set
    #[must_use]
    pub const fn universe(&self) -> &CandidateSet {
        &self.universe
    }

    /// Candidates consistent with every round so far
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.current
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.current.len()
    }

    /// Rounds applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    /// Check if the last round was all `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(RoundSummary::is_solved)
    }

    /// Get the best guess for the current candidates
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateSet` if no candidates remain.
    pub fn next_guess(&self) -> Result<(&Candidate, Score), EngineError> {
        let (guess, score) = self.strategy.select_guess(&self.current)?;

        info!(
            guess = %guess.digits(),
            strategy = self.strategy.name(),
            %score,
            remaining = self.current.len(),
            "selected guess"
        );

        Ok((guess, score))
    }

    /// Narrow the candidates with one round of feedback
    ///
    /// A report that is not all `Correct` also rules out the guessed number
    /// itself. On error the solver is left unchanged, so contradictory
    /// feedback can be corrected and re-entered.
    ///
    /// # Errors
    /// - `EngineError::LengthMismatch` if the report width differs from the universe width
    /// - `EngineError::EmptyCandidateSet` if no candidate is consistent with the feedback
    pub fn apply_feedback(&mut self, report: &FeedbackReport) -> Result<RoundSummary, EngineError> {
        let guess = report.guess();
        let mut narrowed = narrow(report, &self.current)?;

        if !report.is_solved() && narrowed.iter().any(|c| c.digits() == &guess) {
            let rest = narrowed
                .iter()
                .filter(|c| c.digits() != &guess)
                .copied()
                .collect();
            narrowed = CandidateSet::from_candidates(rest, narrowed.width());
        }

        if narrowed.is_empty() {
            return Err(EngineError::EmptyCandidateSet);
        }

        let summary = RoundSummary {
            guess,
            report: *report,
            candidates_before: self.current.len(),
            candidates_after: narrowed.len(),
        };

        info!(
            round = self.history.len() + 1,
            %guess,
            feedback = %report.symbols(),
            before = summary.candidates_before,
            after = summary.candidates_after,
            "applied feedback"
        );

        self.snapshots
            .push(std::mem::replace(&mut self.current, narrowed));
        self.history.push(summary);

        Ok(summary)
    }

    /// Undo the last round
    ///
    /// Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.snapshots.pop() {
            Some(previous) => {
                self.current = previous;
                self.history.pop();
                true
            }
            None => false,
        }
    }

    /// Start over from the full universe
    pub fn reset(&mut self) {
        self.current = self.universe.clone();
        self.snapshots.clear();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackKind, digits_of};
    use crate::primes::universe;
    use crate::solver::strategy::{FrequencyStrategy, HybridStrategy, StrategyType};

    fn small_universe() -> CandidateSet {
        CandidateSet::from_numbers(
            [10007, 10009, 10037, 10039, 10061, 10067, 10069, 10079, 12347, 31121],
            5,
        )
    }

    fn feedback(guess: &Digits, target: u32) -> FeedbackReport {
        FeedbackReport::evaluate(guess, &digits_of(target, 5)).unwrap()
    }

    #[test]
    fn starts_with_whole_universe() {
        let solver = Solver::new(FrequencyStrategy, small_universe());
        assert_eq!(solver.count(), 10);
        assert_eq!(solver.candidates(), solver.universe());
        assert!(solver.history().is_empty());
        assert!(!solver.is_solved());
    }

    #[test]
    fn first_guess_is_deterministic() {
        let universe = universe(5).unwrap();
        let first = Solver::new(FrequencyStrategy, universe.clone());
        let second = Solver::new(FrequencyStrategy, universe);

        let a = first.next_guess().unwrap().0.number();
        let b = second.next_guess().unwrap().0.number();
        assert_eq!(a, b);
        assert_eq!(first.count(), 8363);
    }

    #[test]
    fn correct_feedback_shrinks_universe() {
        let mut solver = Solver::new(FrequencyStrategy, universe(5).unwrap());
        let guess = *solver.next_guess().unwrap().0.digits();

        // Only the first digit is confirmed; five-digit primes disagree on it
        let mut kinds = [FeedbackKind::Absent; 5];
        kinds[0] = FeedbackKind::Correct;
        let report = FeedbackReport::from_kinds(&guess, &kinds).unwrap();

        let round = solver.apply_feedback(&report).unwrap();
        assert!(round.candidates_after < round.candidates_before);
        assert!(
            solver
                .candidates()
                .iter()
                .all(|c| c.digits().digit_at(0) == guess.digit_at(0))
        );
    }

    #[test]
    fn solves_every_small_target() {
        for target in small_universe().numbers() {
            let mut solver = Solver::new(FrequencyStrategy, small_universe());

            for _ in 0..small_universe().len() {
                let guess = *solver.next_guess().unwrap().0.digits();
                let round = solver.apply_feedback(&feedback(&guess, target)).unwrap();
                assert!(solver.candidates().contains(target));
                if round.is_solved() {
                    break;
                }
            }

            assert!(solver.is_solved(), "target {target} not solved");
            assert_eq!(
                solver.history().last().unwrap().guess.to_number(),
                Some(target)
            );
        }
    }

    #[test]
    fn solves_target_in_full_universe() {
        let mut solver = Solver::new(HybridStrategy::default(), universe(5).unwrap());
        let target = 99991;

        while !solver.is_solved() {
            let guess = *solver.next_guess().unwrap().0.digits();
            let before = solver.count();
            solver.apply_feedback(&feedback(&guess, target)).unwrap();
            assert!(solver.is_solved() || solver.count() < before);
            assert!(solver.candidates().contains(target));
        }
    }

    #[test]
    fn unsolved_round_rules_out_guess() {
        let mut solver = Solver::new(FrequencyStrategy, small_universe());
        let guess = digits_of(10007, 5);
        solver.apply_feedback(&feedback(&guess, 10009)).unwrap();
        assert!(!solver.candidates().contains(10007));
    }

    #[test]
    fn guess_admitted_by_its_own_report_is_still_dropped() {
        // ppppc: every digit of the guess has an open twin, so the filter keeps it
        let universe = CandidateSet::from_numbers([11223, 22113], 5);
        let guess = digits_of(11223, 5);
        let report = feedback(&guess, 22113);
        assert_eq!(report.symbols(), "ppppc");
        assert!(
            crate::solver::filter_candidates(&report, &universe)
                .unwrap()
                .contains(11223)
        );

        let mut solver = Solver::new(FrequencyStrategy, universe);
        let round = solver.apply_feedback(&report).unwrap();
        assert_eq!(solver.candidates().numbers(), vec![22113]);
        assert_eq!(round.eliminated(), 1);
    }

    #[test]
    fn contradictory_feedback_leaves_state_unchanged() {
        let mut solver = Solver::new(FrequencyStrategy, small_universe());
        let report = FeedbackReport::from_symbols(&digits_of(88888, 5), "ccccc").unwrap();

        assert_eq!(
            solver.apply_feedback(&report),
            Err(EngineError::EmptyCandidateSet)
        );
        assert_eq!(solver.count(), 10);
        assert!(solver.history().is_empty());
    }

    #[test]
    fn width_mismatch_is_reported() {
        let mut solver = Solver::new(FrequencyStrategy, small_universe());
        let report = FeedbackReport::from_symbols(&digits_of(1009, 4), "caaa").unwrap();
        assert!(matches!(
            solver.apply_feedback(&report),
            Err(EngineError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut solver = Solver::new(StrategyType::default(), small_universe());
        assert!(!solver.undo());

        let guess = digits_of(10007, 5);
        solver.apply_feedback(&feedback(&guess, 10069)).unwrap();
        let after_first = solver.candidates().clone();

        let guess = digits_of(10061, 5);
        solver.apply_feedback(&feedback(&guess, 10069)).unwrap();
        assert_eq!(solver.history().len(), 2);

        assert!(solver.undo());
        assert_eq!(solver.candidates(), &after_first);
        assert_eq!(solver.history().len(), 1);

        assert!(solver.undo());
        assert_eq!(solver.candidates(), solver.universe());
        assert!(!solver.undo());
    }

    #[test]
    fn reset_starts_over() {
        let mut solver = Solver::new(FrequencyStrategy, small_universe());
        solver
            .apply_feedback(&feedback(&digits_of(10007, 5), 12347))
            .unwrap();
        assert!(solver.count() < 10);

        solver.reset();
        assert_eq!(solver.count(), 10);
        assert!(solver.history().is_empty());
        assert!(!solver.undo());
    }

    #[test]
    fn empty_universe_has_no_guess() {
        let solver = Solver::new(FrequencyStrategy, CandidateSet::from_numbers([], 5));
        assert!(matches!(
            solver.next_guess(),
            Err(EngineError::EmptyCandidateSet)
        ));
    }
}
