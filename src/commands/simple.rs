//! Simple interactive CLI mode
//!
//! Line-based solver: suggests a guess, then asks for `c`/`p`/`a` feedback one
//! digit at a time until the number is found.

use crate::core::{Digits, EngineError, FeedbackKind, FeedbackReport, Number};
use crate::output::formatters::format_number;
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every digit was reported correct
    Solved { number: Number, guesses: usize },
    /// The feedback ruled out every candidate
    Exhausted,
}

/// Run the simple interactive mode on the process terminal
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout/stderr fails, or if
/// input ends before the number is found.
pub fn run_simple<S: Strategy>(solver: &mut Solver<S>) -> Result<Outcome> {
    let stdin = io::stdin();
    run_simple_with(
        solver,
        &mut stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Run the simple interactive mode over arbitrary streams
///
/// Rejected tokens are reported on `errors`; everything else goes to `output`.
///
/// # Errors
///
/// Same as [`run_simple`].
pub fn run_simple_with<S, R, W, E>(
    solver: &mut Solver<S>,
    input: &mut R,
    output: &mut W,
    errors: &mut E,
) -> Result<Outcome>
where
    S: Strategy,
    R: BufRead,
    W: Write,
    E: Write,
{
    let width = solver.universe().width();

    let Ok((first, _)) = solver.next_guess() else {
        return Ok(Outcome::Exhausted);
    };
    let mut guess = *first.digits();
    writeln!(
        output,
        "The best first guess is: {}. The number of remaining candidates is {}",
        guess,
        solver.count()
    )?;

    let mut guesses = 1;
    loop {
        let mut kinds = Vec::with_capacity(width);
        for position in 0..width {
            kinds.push(read_kind(input, output, errors, &guess, position)?);
        }
        let report = FeedbackReport::from_kinds(&guess, &kinds)?;

        if report.is_solved() {
            let number = guess
                .to_number()
                .context("guess does not fit in a number")?;
            writeln!(
                output,
                "We found the correct number ({})! 🎉",
                format_number(number, width).green().bold()
            )?;
            return Ok(Outcome::Solved { number, guesses });
        }

        match solver.apply_feedback(&report) {
            Ok(_) => {}
            Err(EngineError::EmptyCandidateSet) => return Ok(Outcome::Exhausted),
            Err(e) => return Err(e.into()),
        }

        guess = *solver.next_guess()?.0.digits();
        guesses += 1;
        writeln!(
            output,
            "The new best guess is: {}. The number of remaining candidates is {}",
            guess,
            solver.count()
        )?;
    }
}

/// Ask for the feedback of one position until a valid token is entered
fn read_kind<R: BufRead, W: Write, E: Write>(
    input: &mut R,
    output: &mut W,
    errors: &mut E,
    guess: &Digits,
    position: usize,
) -> Result<FeedbackKind> {
    write!(output, "{}", prompt(guess, position))?;
    output.flush()?;

    loop {
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read feedback")?;
        if read == 0 {
            bail!("input ended before the number was found");
        }

        let token = line.trim_end_matches(['\r', '\n']);
        let mut symbols = token.chars();
        match (symbols.next().and_then(FeedbackKind::from_symbol), symbols.next()) {
            (Some(kind), None) => return Ok(kind),
            _ => writeln!(errors, "Invalid feedback: {token}")?,
        }
    }
}

/// Question for one position, with that digit of the guess underlined
fn prompt(guess: &Digits, position: usize) -> String {
    let digits: String = guess
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, digit)| {
            let digit = digit.to_string().bold();
            if i == position {
                digit.underline().to_string()
            } else {
                digit.to_string()
            }
        })
        .collect();

    format!(
        "Was the digit in position {} of the guess ({digits}) in the {} position, {} but in the wrong position or {}? [{}/{}/{}] ",
        (position + 1).to_string().bold(),
        "correct".green(),
        "present".yellow(),
        "absent".red(),
        "c".green(),
        "p".yellow(),
        "a".red(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CandidateSet;
    use crate::solver::{FrequencyStrategy, StrategyType};
    use std::io::Cursor;

    struct Session {
        outcome: Result<Outcome>,
        output: String,
        errors: String,
    }

    fn run(numbers: &[Number], input: &str) -> Session {
        let universe = CandidateSet::from_numbers(numbers.iter().copied(), 5);
        let mut solver = Solver::new(FrequencyStrategy, universe);
        let mut output = Vec::new();
        let mut errors = Vec::new();

        let outcome = run_simple_with(
            &mut solver,
            &mut Cursor::new(input.as_bytes()),
            &mut output,
            &mut errors,
        );

        Session {
            outcome,
            output: String::from_utf8(output).unwrap(),
            errors: String::from_utf8(errors).unwrap(),
        }
    }

    #[test]
    fn all_correct_solves_immediately() {
        let session = run(&[10007], "c\nc\nc\nc\nc\n");

        assert_eq!(
            session.outcome.unwrap(),
            Outcome::Solved {
                number: 10007,
                guesses: 1
            }
        );
        assert!(session.output.starts_with(
            "The best first guess is: 10007. The number of remaining candidates is 1\n"
        ));
        assert_eq!(session.output.matches("Was the digit in position").count(), 5);
        assert!(session.output.contains("We found the correct number ("));
        assert!(session.output.contains("🎉"));
    }

    #[test]
    fn invalid_token_reasks_same_position() {
        let session = run(&[10007], "x\nC\ncc\n\nc\nc\nc\nc\nc\n");

        assert!(matches!(session.outcome, Ok(Outcome::Solved { .. })));
        assert!(session.errors.contains("Invalid feedback: x\n"));
        assert!(session.errors.contains("Invalid feedback: C\n"));
        assert!(session.errors.contains("Invalid feedback: cc\n"));
        assert_eq!(session.errors.lines().count(), 4);
        // The question is asked once per position, not once per attempt
        assert_eq!(session.output.matches("Was the digit in position").count(), 5);
    }

    #[test]
    fn windows_line_endings_accepted() {
        let session = run(&[10007], "c\r\nc\r\nc\r\nc\r\nc\r\n");
        assert!(matches!(session.outcome, Ok(Outcome::Solved { .. })));
        assert!(session.errors.is_empty());
    }

    #[test]
    fn second_round_after_feedback() {
        // Frequency scores tie, so 10007 (first) is suggested; the answer is 10009
        let session = run(&[10007, 10009], "c\nc\nc\nc\na\nc\nc\nc\nc\nc\n");

        assert_eq!(
            session.outcome.unwrap(),
            Outcome::Solved {
                number: 10009,
                guesses: 2
            }
        );
        assert!(session.output.contains(
            "The best first guess is: 10007. The number of remaining candidates is 2\n"
        ));
        assert!(session.output.contains(
            "The new best guess is: 10009. The number of remaining candidates is 1\n"
        ));
    }

    #[test]
    fn contradictory_feedback_exhausts_candidates() {
        let session = run(&[10007], "a\na\na\na\na\n");
        assert_eq!(session.outcome.unwrap(), Outcome::Exhausted);
    }

    #[test]
    fn empty_universe_is_exhausted() {
        let session = run(&[], "");
        assert_eq!(session.outcome.unwrap(), Outcome::Exhausted);
        assert!(session.output.is_empty());
    }

    #[test]
    fn end_of_input_is_an_error() {
        let session = run(&[10007, 10009], "c\nc\n");
        let error = session.outcome.unwrap_err();
        assert!(error.to_string().contains("input ended"));
    }

    #[test]
    fn leading_zeros_kept_in_guess() {
        let universe = CandidateSet::from_numbers([2, 3, 5, 7], 2);
        let mut solver = Solver::new(StrategyType::default(), universe);
        let mut output = Vec::new();

        let outcome = run_simple_with(
            &mut solver,
            &mut Cursor::new("c\nc\n".as_bytes()),
            &mut output,
            &mut io::sink(),
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("The best first guess is: 02."));
        assert_eq!(
            outcome,
            Outcome::Solved {
                number: 2,
                guesses: 1
            }
        );
    }
}
