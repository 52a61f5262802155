//! Frequency heuristic
//!
//! Cheap scoring: how common each guess digit is at its position among the
//! remaining candidates.

mod calculator;
mod selector;

pub use calculator::DigitFrequencies;
pub use selector::select_best_guess;
