//! Progress repository port
//!
//! A key-value progress record scoped to one user: read at session start,
//! written at session end. Injected into the use cases instead of living
//! as global state.

use async_trait::async_trait;
use prep_domain::ProgressRecord;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur while loading or saving progress
#[derive(Error, Debug)]
pub enum ProgressStoreError {
    #[error("Failed to access progress store: {0}")]
    Io(String),

    #[error("Failed to encode progress record: {0}")]
    Encode(String),
}

/// Persistence for the user's [`ProgressRecord`]
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load the record; a store with nothing saved yields the default record
    async fn load(&self) -> Result<ProgressRecord, ProgressStoreError>;

    /// Replace the stored record
    async fn save(&self, record: &ProgressRecord) -> Result<(), ProgressStoreError>;
}

/// Progress kept in memory for the lifetime of the process.
#[derive(Default)]
pub struct InMemoryProgressRepository {
    record: Mutex<ProgressRecord>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: ProgressRecord) -> Self {
        Self {
            record: Mutex::new(record),
        }
    }

    /// Copy of the current record
    pub fn snapshot(&self) -> ProgressRecord {
        self.record
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn load(&self) -> Result<ProgressRecord, ProgressStoreError> {
        self.record
            .lock()
            .map(|r| r.clone())
            .map_err(|e| ProgressStoreError::Io(e.to_string()))
    }

    async fn save(&self, record: &ProgressRecord) -> Result<(), ProgressStoreError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|e| ProgressStoreError::Io(e.to_string()))?;
        *guard = record.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_roundtrip() {
        let repo = InMemoryProgressRepository::new();
        assert_eq!(repo.load().await.unwrap(), ProgressRecord::default());

        let record = ProgressRecord {
            total_answered: 5,
            total_correct: 4,
            ..ProgressRecord::default()
        };
        repo.save(&record).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), record);
        assert_eq!(repo.snapshot().total_correct, 4);
    }
}
