//! Simulation heuristic
//!
//! Expensive scoring: simulate each guess against every remaining candidate as
//! the solution and count what the filter would leave. Lower scores are better.

mod calculator;
mod selector;

pub use calculator::{SimulationMetrics, calculate_metrics, calculate_total_remaining};
pub use selector::select_best_guess;
