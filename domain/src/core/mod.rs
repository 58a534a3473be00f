//! Core domain concepts shared across all subdomains.
//!
//! - [`domain::Domain`] - the closed set of content categories
//! - [`difficulty::Difficulty`] - coarse question hardness
//! - [`question::Question`] - an immutable bank entry with four labeled choices
//! - [`error::DomainError`] - domain-level errors

pub mod difficulty;
pub mod domain;
pub mod error;
pub mod question;
