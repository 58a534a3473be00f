//! Question bank port
//!
//! Defines how the application layer obtains the (immutable) bank.

use async_trait::async_trait;
use prep_domain::Question;
use thiserror::Error;

/// Errors that can occur while loading a bank
#[derive(Error, Debug)]
pub enum BankSourceError {
    #[error("Question bank not found: {0}")]
    NotFound(String),

    #[error("Failed to read question bank: {0}")]
    Io(String),

    #[error("Invalid question bank: {0}")]
    Parse(String),
}

/// Source of the question bank
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuestionBankPort: Send + Sync {
    /// Load every question in the bank
    async fn load_bank(&self) -> Result<Vec<Question>, BankSourceError>;

    /// Human-readable description of where the bank comes from
    fn source_description(&self) -> String {
        "question bank".to_string()
    }
}

/// Bank held in memory, for tests and embedding.
pub struct InMemoryQuestionBank {
    questions: Vec<Question>,
}

impl InMemoryQuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionBankPort for InMemoryQuestionBank {
    async fn load_bank(&self) -> Result<Vec<Question>, BankSourceError> {
        Ok(self.questions.clone())
    }

    fn source_description(&self) -> String {
        format!("in-memory bank ({} questions)", self.questions.len())
    }
}
