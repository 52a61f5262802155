//! Engine error taxonomy

use thiserror::Error;

/// Errors raised by the candidate engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Guess and solution (or report and candidate set) have different widths.
    /// Always a caller bug.
    #[error("digit sequence length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// No number in the universe satisfies the feedback given so far
    #[error("no candidates remain that are consistent with the feedback")]
    EmptyCandidateSet,

    /// A feedback code outside the closed set of kinds
    #[error("unrecognized feedback kind code {0}")]
    InvalidFeedbackKind(u8),

    /// The prime universe can only be generated for small widths
    #[error("unsupported digit count {0} (expected 1-7)")]
    UnsupportedWidth(usize),
}

impl EngineError {
    /// Process exit code reported when this error ends the program
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidFeedbackKind(_) => 2,
            Self::LengthMismatch { .. } | Self::EmptyCandidateSet | Self::UnsupportedWidth(_) => 1,
        }
    }
}
