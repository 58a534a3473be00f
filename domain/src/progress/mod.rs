//! Grading and the per-user progress record
//!
//! The record is what a progress repository persists between sessions.
//! Session assembly only reads its [`SessionHistory`](crate::SessionHistory).

pub mod grading;
pub mod record;

pub use grading::{DomainTally, SessionScore, grade_session};
pub use record::{ExamAttempt, ProgressRecord, ProgressRules};
