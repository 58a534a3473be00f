//! Complete session use case
//!
//! Grades the user's responses, folds the result into the progress record
//! (totals, domain accuracy, weak domains, exam history, recent-id lists),
//! and saves it.

use crate::config::SessionParams;
use crate::ports::progress_repository::{ProgressRepository, ProgressStoreError};
use chrono::{DateTime, Utc};
use prep_domain::{AssembledSession, Domain, DomainError, SessionMode, SessionScore, grade_session};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while completing a session
#[derive(Error, Debug)]
pub enum CompleteSessionError {
    #[error(transparent)]
    Grading(#[from] DomainError),

    #[error(transparent)]
    Progress(#[from] ProgressStoreError),
}

/// Outcome of a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub mode: SessionMode,
    pub score: SessionScore,
    /// Overall readiness after this session
    pub readiness: u32,
    pub pass_likelihood: u32,
    pub weak_domains: Vec<Domain>,
}

/// Use case for grading and recording a finished session
pub struct CompleteSessionUseCase<P: ProgressRepository + 'static> {
    progress: Arc<P>,
    params: SessionParams,
}

impl<P: ProgressRepository + 'static> CompleteSessionUseCase<P> {
    pub fn new(progress: Arc<P>, params: SessionParams) -> Self {
        Self { progress, params }
    }

    /// Grade and record `session`, stamping exam attempts with the current time
    pub async fn execute(
        &self,
        session: &AssembledSession,
        responses: &[Option<usize>],
    ) -> Result<SessionReport, CompleteSessionError> {
        self.execute_at(session, responses, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        session: &AssembledSession,
        responses: &[Option<usize>],
        now: DateTime<Utc>,
    ) -> Result<SessionReport, CompleteSessionError> {
        // grade before touching the store so a bad response list changes nothing
        let score = grade_session(&session.questions, responses)?;

        let mut record = self.progress.load().await?;
        record.record_session(
            session.mode,
            &score,
            session.question_ids(),
            now,
            &self.params.rules,
        );
        self.progress.save(&record).await?;

        info!(
            "Recorded {} session: {}/{} ({}%)",
            session.mode, score.correct, score.total, score.percent
        );

        Ok(SessionReport {
            mode: session.mode,
            score,
            readiness: record.readiness_percent(),
            pass_likelihood: record.pass_likelihood(),
            weak_domains: record.weak_domains,
        })
    }
}
