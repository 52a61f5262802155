//! Core domain types for Primel
//!
//! Digit sequences, feedback reports and candidate sets. Everything here is
//! pure and has no knowledge of strategies or terminals.

mod candidates;
mod digits;
mod error;
mod feedback;

pub use candidates::{Candidate, CandidateSet};
pub use digits::{Digits, DigitsError, MAX_DIGITS, Number, digits_of};
pub use error::EngineError;
pub use feedback::{Feedback, FeedbackKind, FeedbackReport};
