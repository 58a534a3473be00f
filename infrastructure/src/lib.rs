//! Infrastructure layer for dcf-prep
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod bank;
pub mod config;
pub mod progress;

// Re-export commonly used types
pub use bank::JsonQuestionBank;
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, DEFAULT_BANK_FILE, FileConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use progress::JsonProgressStore;
