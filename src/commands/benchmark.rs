//! Benchmark command
//!
//! Tests solver performance across randomly sampled targets.

use super::solve::{SolveConfig, solve_number};
use crate::core::{CandidateSet, Number};
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use rand::{SeedableRng as _, prelude::StdRng, seq::IndexedRandom};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_numbers: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved targets per guess count
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub numbers_per_second: f64,
}

/// Draw `count` distinct targets from `candidates`
///
/// Sampling is reproducible when a seed is given. Asking for more targets than
/// there are candidates returns every candidate.
#[must_use]
pub fn sample_targets(candidates: &CandidateSet, count: usize, seed: Option<u64>) -> Vec<Number> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    candidates
        .numbers()
        .choose_multiple(&mut rng, count)
        .copied()
        .collect()
}

/// Run benchmark on a set of targets
///
/// The opening guess is chosen once (or taken from `first_guess`) and reused
/// for every target. Targets not solved within `max_guesses` count toward
/// `total_numbers` but not toward the guess statistics.
///
/// # Errors
///
/// Returns an error if a target is not in the solver's universe or no opening
/// guess can be chosen.
pub fn run_benchmark<S: Strategy>(
    solver: &mut Solver<S>,
    targets: &[Number],
    first_guess: Option<Number>,
    max_guesses: usize,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let opening = match first_guess {
        Some(first) => first,
        None if targets.is_empty() => 0,
        None => {
            solver.reset();
            solver.next_guess()?.0.number()
        }
    };

    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for &target in targets {
        let config = SolveConfig::new(target)
            .with_max_guesses(max_guesses)
            .with_first_guess(Some(opening));
        let result = solve_number(config, solver)?;

        if result.success {
            let guesses = result.guesses.len();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_seen = max_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_numbers: targets.len(),
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses: max_seen,
        distribution,
        duration,
        numbers_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
