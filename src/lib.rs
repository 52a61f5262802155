//! Primel Solver
//!
//! A solver for Primel, the Wordle variant whose answers are five-digit primes.
//! Each guess is scored per digit (correct, present or absent) and the solver
//! narrows the prime candidates until one remains.
//!
//! # Quick Start
//!
//! ```rust
//! use primel_solver::core::{FeedbackReport, digits_of};
//! use primel_solver::primes::universe;
//! use primel_solver::solver::{FrequencyStrategy, Solver};
//!
//! let mut solver = Solver::new(FrequencyStrategy, universe(5).unwrap());
//! let target = digits_of(99991, 5);
//!
//! loop {
//!     let guess = *solver.next_guess().unwrap().0.digits();
//!     let report = FeedbackReport::evaluate(&guess, &target).unwrap();
//!     if report.is_solved() {
//!         break;
//!     }
//!     solver.apply_feedback(&report).unwrap();
//! }
//! assert!(solver.candidates().contains(99991));
//! ```

// Core domain types
pub mod core;

// Prime candidate universe
pub mod primes;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
