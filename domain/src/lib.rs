//! Domain layer for dcf-prep
//!
//! This crate contains the session-assembly core, its entities, and value
//! objects. It performs no I/O and has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sessions
//!
//! A session is an ordered list of [`AssembledQuestion`]s drawn from a bank:
//!
//! - **Practice**: one domain, unseen questions preferred
//! - **Exam**: all domains, difficulty-balanced, recent exam questions penalised
//! - **Adaptive**: weak domains and harder questions first
//!
//! ## Determinism
//!
//! Every assembler is a pure function of `(bank, history, config, seed)`.
//! The same seed always produces the same session.

pub mod bank;
pub mod core;
pub mod progress;
pub mod sampling;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use bank::{BankIssue, BankIssueCode, BankPolicy, BankReport, Severity, validate_bank};
pub use crate::core::{
    difficulty::Difficulty,
    domain::Domain,
    error::DomainError,
    question::{ChoiceLabel, Choices, Provenance, Question, Rationale},
};
pub use progress::{
    DomainTally, ExamAttempt, ProgressRecord, ProgressRules, SessionScore, grade_session,
};
pub use sampling::{RandomSource, SeededRandom, shuffle, weighted_pick};
pub use session::{
    AdaptiveConfig, AssembledQuestion, AssembledSession, DifficultyMix, DifficultyTargets,
    ExamConfig, ExamPreset, PracticeConfig, PresentedChoice, SessionHistory, SessionMode,
    assemble_adaptive_session, assemble_exam_session, assemble_practice_session,
    present_question,
};
