//! Session assembly
//!
//! Turns a bank plus the caller's history into an ordered list of
//! presentable questions.
//!
//! ```text
//!   SeededRandom ──▶ shuffle / weighted_pick ──▶ present_question
//!                                                   │
//!         ┌─────────────────────┬───────────────────┤
//!         ▼                     ▼                   ▼
//!   practice (one domain)  exam (mixed, balanced)  adaptive (weak first)
//! ```
//!
//! All assemblers degrade instead of failing: an exhausted pool yields a
//! shorter session.

pub mod adaptive;
pub mod assembled;
pub mod config;
pub mod exam;
pub mod history;
pub mod practice;
pub mod presenter;

pub use adaptive::assemble_adaptive_session;
pub use assembled::{AssembledQuestion, AssembledSession, PresentedChoice, SessionMode};
pub use config::{
    AdaptiveConfig, DifficultyMix, DifficultyTargets, ExamConfig, ExamPreset, PracticeConfig,
};
pub use exam::assemble_exam_session;
pub use history::SessionHistory;
pub use practice::assemble_practice_session;
pub use presenter::present_question;
