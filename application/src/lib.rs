//! Application layer for dcf-prep
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{PresetSize, SessionParams};
pub use ports::{
    progress_repository::{InMemoryProgressRepository, ProgressRepository, ProgressStoreError},
    question_bank::{BankSourceError, InMemoryQuestionBank, QuestionBankPort},
};
pub use use_cases::complete_session::{
    CompleteSessionError, CompleteSessionUseCase, SessionReport,
};
pub use use_cases::show_progress::{ProgressSnapshot, ShowProgressUseCase};
pub use use_cases::start_session::{
    SessionRequest, StartSessionError, StartSessionInput, StartSessionUseCase, clock_seed,
};
pub use use_cases::validate_bank::ValidateBankUseCase;
