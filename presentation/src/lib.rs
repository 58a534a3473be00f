//! Presentation layer for dcf-prep
//!
//! This crate contains CLI definitions, output formatters,
//! and the interactive quiz loop.

pub mod cli;
pub mod output;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ExamSize, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use quiz::{Answer, QuizRunner, parse_answer};
