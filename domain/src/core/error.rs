//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The assemblers never fail on short pools; these errors only cover
/// values that cannot be interpreted at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown choice label: {0}")]
    UnknownChoiceLabel(String),

    #[error("Expected {expected} responses, got {actual}")]
    ResponseCountMismatch { expected: usize, actual: usize },

    #[error("Response index {index} out of range for question {question_id}")]
    ResponseOutOfRange { question_id: String, index: usize },
}
