//! Question bank integrity checks

pub mod validation;

pub use validation::{BankIssue, BankIssueCode, BankPolicy, BankReport, Severity, validate_bank};
