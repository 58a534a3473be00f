//! Show progress use case

use crate::ports::progress_repository::{ProgressRepository, ProgressStoreError};
use prep_domain::{Domain, ExamAttempt, ProgressRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Summary of the user's progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub total_answered: u32,
    pub total_correct: u32,
    pub readiness: u32,
    pub pass_likelihood: u32,
    pub domain_accuracy: BTreeMap<Domain, u32>,
    pub weak_domains: Vec<Domain>,
    /// Most recent exam attempt, if any
    pub last_exam: Option<ExamAttempt>,
    pub exams_taken: usize,
}

impl From<&ProgressRecord> for ProgressSnapshot {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            total_answered: record.total_answered,
            total_correct: record.total_correct,
            readiness: record.readiness_percent(),
            pass_likelihood: record.pass_likelihood(),
            domain_accuracy: record.domain_accuracy.clone(),
            weak_domains: record.weak_domains.clone(),
            last_exam: record.exam_history.last().cloned(),
            exams_taken: record.exam_history.len(),
        }
    }
}

/// Use case for reading the progress summary
pub struct ShowProgressUseCase<P: ProgressRepository + 'static> {
    progress: Arc<P>,
}

impl<P: ProgressRepository + 'static> ShowProgressUseCase<P> {
    pub fn new(progress: Arc<P>) -> Self {
        Self { progress }
    }

    pub async fn execute(&self) -> Result<ProgressSnapshot, ProgressStoreError> {
        let record = self.progress.load().await?;
        Ok(ProgressSnapshot::from(&record))
    }
}
