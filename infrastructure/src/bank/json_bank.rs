//! JSON file question bank.
//!
//! Accepts either an object with a `questions` array or a bare array of
//! questions. Unknown domain, difficulty or choice labels are rejected
//! here, at deserialization.

use async_trait::async_trait;
use prep_application::{BankSourceError, QuestionBankPort};
use prep_domain::Question;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Question bank read from a JSON file on every load.
pub struct JsonQuestionBank {
    path: PathBuf,
}

impl JsonQuestionBank {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse bank JSON in either accepted layout
    pub fn parse(json: &str) -> Result<Vec<Question>, BankSourceError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| BankSourceError::Parse(e.to_string()))?;
        let questions = match value {
            serde_json::Value::Object(mut map) => {
                let inner = map.remove("questions").ok_or_else(|| {
                    BankSourceError::Parse("expected a \"questions\" array".to_string())
                })?;
                serde_json::from_value(inner)
            }
            bare => serde_json::from_value(bare),
        };
        questions.map_err(|e| BankSourceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl QuestionBankPort for JsonQuestionBank {
    async fn load_bank(&self) -> Result<Vec<Question>, BankSourceError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => BankSourceError::NotFound(self.path.display().to_string()),
                _ => BankSourceError::Io(format!("{}: {}", self.path.display(), e)),
            })?;

        let questions = Self::parse(&json)?;
        debug!(
            "Loaded {} questions from {}",
            questions.len(),
            self.path.display()
        );
        Ok(questions)
    }

    fn source_description(&self) -> String {
        self.path.display().to_string()
    }
}
