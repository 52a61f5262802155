//! Number solving command
//!
//! Plays the solver against a known target and records the solution path.

use crate::core::{FeedbackReport, Number, digits_of};
use crate::solver::{Score, Solver, Strategy};
use anyhow::{Result, ensure};

/// Configuration for solving a number
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    pub target: Number,
    pub max_guesses: usize,
    /// Opening guess to play instead of the strategy's choice
    pub first_guess: Option<Number>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: Number) -> Self {
        Self {
            target,
            max_guesses: 6,
            first_guess: None,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn with_first_guess(mut self, first_guess: Option<Number>) -> Self {
        self.first_guess = first_guess;
        self
    }
}

/// Result of solving a number
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Number,
    pub width: usize,
    pub success: bool,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
#[derive(Debug, Clone, Copy)]
pub struct GuessStep {
    pub guess: Number,
    pub report: FeedbackReport,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Strategy score of the guess against the candidates before it was played
    pub score: Option<Score>,
}

/// Solve `config.target` with the given solver
///
/// The solver is reset first and left in its final state.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not in the solver's universe
/// - The forced first guess does not have the universe's width
/// - The solver cannot provide a guess
pub fn solve_number<S: Strategy>(
    config: SolveConfig,
    solver: &mut Solver<S>,
) -> Result<SolveResult> {
    let width = solver.universe().width();
    ensure!(
        solver.universe().contains(config.target),
        "{} is not a {width}-digit prime",
        config.target
    );
    if let Some(first) = config.first_guess {
        ensure!(
            first < 10u32.pow(width as u32),
            "first guess {first} has more than {width} digits"
        );
    }

    let solution = digits_of(config.target, width);
    let mut guesses = Vec::new();
    solver.reset();

    for turn in 0..config.max_guesses {
        let (guess, score) = match config.first_guess {
            Some(first) if turn == 0 => {
                let digits = digits_of(first, width);
                let score = solver.strategy().score(&digits, solver.candidates()).ok();
                (digits, score)
            }
            _ => {
                let (candidate, score) = solver.next_guess()?;
                (*candidate.digits(), Some(score))
            }
        };

        let report = FeedbackReport::evaluate(&guess, &solution)?;
        let round = solver.apply_feedback(&report)?;

        guesses.push(GuessStep {
            guess: guess.to_number().unwrap_or_default(),
            report,
            candidates_before: round.candidates_before,
            candidates_after: round.candidates_after,
            score,
        });

        if round.is_solved() {
            return Ok(SolveResult {
                target: config.target,
                width,
                success: true,
                guesses,
            });
        }
    }

    Ok(SolveResult {
        target: config.target,
        width,
        success: false,
        guesses,
    })
}
