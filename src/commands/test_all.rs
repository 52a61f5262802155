//! Test all targets - comprehensive solver evaluation
//!
//! Runs the solver against every number in the universe and generates statistics.

use super::solve::{SolveConfig, solve_number};
use crate::core::Number;
use crate::output::formatters::{format_number, plural};
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Guess limit per target
const MAX_GUESSES: usize = 20;

/// Result from testing a single number
#[derive(Debug, Clone)]
pub struct NumberTestResult {
    pub number: Number,
    pub guesses: Vec<Number>,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all numbers
#[derive(Debug)]
pub struct TestAllStatistics {
    pub width: usize,
    pub total_numbers: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Slowest target to solve and its duration
    pub slowest: Option<(Number, Duration)>,
    /// Targets needing the most guesses, most first
    pub hardest: Vec<(Number, usize)>,
    pub first_guess_used: FxHashMap<Number, usize>,
}

/// Run solver on every universe number (or the first `limit` of them)
///
/// If `first_guess` is provided, it is played as the opening guess instead of
/// the strategy's choice. Progress is shown on stderr.
///
/// # Errors
///
/// Returns an error if no opening guess can be chosen.
pub fn run_test_all<S: Strategy>(
    solver: &mut Solver<S>,
    limit: Option<usize>,
    first_guess: Option<Number>,
) -> Result<TestAllStatistics> {
    let width = solver.universe().width();
    let targets: Vec<Number> = solver
        .universe()
        .numbers()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    // The opening is the same for every target, so pick it once
    let opening = match first_guess {
        Some(first) => Some(first),
        None if targets.is_empty() => None,
        None => {
            solver.reset();
            Some(solver.next_guess()?.0.number())
        }
    };

    let pb = ProgressBar::new(targets.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut results = Vec::with_capacity(targets.len());
    let total_start = Instant::now();

    for (idx, &target) in targets.iter().enumerate() {
        let number_start = Instant::now();
        let config = SolveConfig::new(target)
            .with_max_guesses(MAX_GUESSES)
            .with_first_guess(opening);
        let solved = solve_number(config, solver)?;

        results.push(NumberTestResult {
            number: target,
            guesses: solved.guesses.iter().map(|step| step.guess).collect(),
            success: solved.success,
            duration: number_start.elapsed(),
        });

        if idx % 25 == 0 {
            let avg = results.iter().map(|r| r.guesses.len()).sum::<usize>() as f64
                / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(width, &results, total_start.elapsed()))
}

fn summarize(width: usize, results: &[NumberTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut first_guess_used: FxHashMap<Number, usize> = FxHashMap::default();
    for result in results {
        if result.success {
            *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
        }
        if let Some(&first) = result.guesses.first() {
            *first_guess_used.entry(first).or_insert(0) += 1;
        }
    }

    let solved: Vec<&NumberTestResult> = results.iter().filter(|r| r.success).collect();
    let total_guesses: usize = solved.iter().map(|r| r.guesses.len()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut hardest: Vec<(Number, usize)> =
        solved.iter().map(|r| (r.number, r.guesses.len())).collect();
    // Stable sort keeps universe order among equals
    hardest.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    hardest.truncate(10);

    TestAllStatistics {
        width,
        total_numbers: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.guesses.len()).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.guesses.len()).min().unwrap_or(0),
        slowest: results
            .iter()
            .max_by_key(|r| r.duration)
            .map(|r| (r.number, r.duration)),
        hardest,
        first_guess_used,
    }
}

/// Print test-all statistics with formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    let total = stats.total_numbers.max(1) as f64;

    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Numbers tested:      {}", stats.total_numbers);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per number:     {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    let mut counts: Vec<(usize, usize)> = stats
        .guess_distribution
        .iter()
        .map(|(&g, &c)| (g, c))
        .collect();
    counts.sort_unstable();
    for (guesses, count) in counts {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guess{}: {bar} {count:5} ({percentage:5.1}%)", plural(guesses));
    }

    if let Some((number, duration)) = stats.slowest {
        println!("\n🐢 {}", "Slowest Target".yellow().bold());
        println!(
            "  {} took {:.1}ms",
            format_number(number, stats.width).bright_yellow(),
            duration.as_secs_f64() * 1000.0
        );
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Numbers".yellow().bold());
        for &(number, guesses) in stats.hardest.iter().take(5) {
            println!(
                "  {} ({guesses} guess{})",
                format_number(number, stats.width).yellow(),
                plural(guesses)
            );
        }
    }

    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(Number, usize)> = stats
        .first_guess_used
        .iter()
        .map(|(&k, &v)| (k, v))
        .collect();
    first_guesses.sort_by_key(|&(number, count)| (std::cmp::Reverse(count), number));

    for (number, count) in first_guesses.iter().take(5) {
        println!(
            "  {}: {} times ({:.1}%)",
            format_number(*number, stats.width),
            count,
            *count as f64 / total * 100.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CandidateSet;
    use crate::solver::FrequencyStrategy;

    fn solver() -> Solver<FrequencyStrategy> {
        let universe = CandidateSet::from_numbers(
            [10007, 10009, 10037, 10039, 10061, 10067, 10069, 10079, 12347, 31121],
            5,
        );
        Solver::new(FrequencyStrategy, universe)
    }

    #[test]
    fn solves_every_number() {
        let mut solver = solver();
        let stats = run_test_all(&mut solver, None, None).unwrap();

        assert_eq!(stats.total_numbers, 10);
        assert_eq!(stats.solved, 10);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 10);
        assert!(stats.min_guesses >= 1);
        assert!(stats.average_guesses >= stats.min_guesses as f64);
        assert!(stats.average_guesses <= stats.max_guesses as f64);
        // Exactly one opening is used for every target
        assert_eq!(stats.first_guess_used.len(), 1);
        assert_eq!(stats.first_guess_used.values().sum::<usize>(), 10);
    }

    #[test]
    fn limit_restricts_targets() {
        let mut solver = solver();
        let stats = run_test_all(&mut solver, Some(3), None).unwrap();
        assert_eq!(stats.total_numbers, 3);
    }

    #[test]
    fn forced_first_guess_used() {
        let mut solver = solver();
        let stats = run_test_all(&mut solver, Some(4), Some(12347)).unwrap();
        assert_eq!(stats.first_guess_used.get(&12347), Some(&4));
    }

    #[test]
    fn hardest_sorted_descending() {
        let mut solver = solver();
        let stats = run_test_all(&mut solver, None, None).unwrap();

        assert!(stats.hardest.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(stats.hardest.first().map(|&(_, n)| n), Some(stats.max_guesses));
    }

    #[test]
    fn empty_run() {
        let mut solver = solver();
        let stats = run_test_all(&mut solver, Some(0), None).unwrap();
        assert_eq!(stats.total_numbers, 0);
        assert!(stats.slowest.is_none());
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }
}
