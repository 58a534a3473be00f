//! JSON file progress store.
//!
//! The whole [`ProgressRecord`] lives in one pretty-printed JSON file.
//! Writes go to a sibling temp file that is then renamed over the target,
//! so a crash mid-write leaves the previous record intact.

use async_trait::async_trait;
use prep_application::{ProgressRepository, ProgressStoreError};
use prep_domain::ProgressRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Progress record stored as a JSON file
pub struct JsonProgressStore {
    path: PathBuf,
}

impl JsonProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ProgressRepository for JsonProgressStore {
    async fn load(&self) -> Result<ProgressRecord, ProgressStoreError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No progress file at {}, starting fresh", self.path.display());
                return Ok(ProgressRecord::default());
            }
            Err(e) => {
                return Err(ProgressStoreError::Io(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        match serde_json::from_str(&json) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!(
                    "Ignoring unreadable progress file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(ProgressRecord::default())
            }
        }
    }

    async fn save(&self, record: &ProgressRecord) -> Result<(), ProgressStoreError> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| ProgressStoreError::Encode(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ProgressStoreError::Io(format!("{}: {}", parent.display(), e)))?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| ProgressStoreError::Io(format!("{}: {}", temp.display(), e)))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| ProgressStoreError::Io(format!("{}: {}", self.path.display(), e)))?;

        debug!("Saved progress to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_domain::{Domain, SessionHistory};

    #[tokio::test]
    async fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProgressStore::new(dir.path().join("progress.json"));
        assert_eq!(store.load().await.unwrap(), ProgressRecord::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProgressStore::new(dir.path().join("nested").join("progress.json"));
        let record = ProgressRecord {
            history: SessionHistory::new().with_exam_ids(["SNP-001", "CAAN-004"]),
            total_answered: 10,
            total_correct: 7,
            weak_domains: vec![Domain::Bos25],
            ..ProgressRecord::default()
        };

        store.save(&record).await.unwrap();
        assert_eq!(store.load().await.unwrap(), record);
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonProgressStore::new(&path);
        assert_eq!(store.load().await.unwrap(), ProgressRecord::default());
    }

    #[tokio::test]
    async fn test_partial_record_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, r#"{"total_answered": 4, "total_correct": 3}"#).unwrap();

        let record = JsonProgressStore::new(&path).load().await.unwrap();
        assert_eq!(record.total_answered, 4);
        assert!(record.history.recent_exam_question_ids.is_empty());
    }
}
