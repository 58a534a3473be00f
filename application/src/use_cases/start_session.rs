//! Start session use case
//!
//! Loads the bank and the user's progress, resolves the request against
//! [`SessionParams`], and hands the result to the matching assembler.
//! Starting a session never writes progress; that happens in
//! [`CompleteSessionUseCase`](super::complete_session::CompleteSessionUseCase).

use crate::config::SessionParams;
use crate::ports::progress_repository::{ProgressRepository, ProgressStoreError};
use crate::ports::question_bank::{BankSourceError, QuestionBankPort};
use prep_domain::{
    AssembledSession, Domain, ExamPreset, SessionMode, assemble_adaptive_session,
    assemble_exam_session, assemble_practice_session,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while starting a session
#[derive(Error, Debug)]
pub enum StartSessionError {
    #[error(transparent)]
    Bank(#[from] BankSourceError),

    #[error(transparent)]
    Progress(#[from] ProgressStoreError),
}

/// What kind of session to assemble
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRequest {
    Practice {
        domain: Domain,
        count: Option<usize>,
    },
    Exam {
        preset: ExamPreset,
        count: Option<usize>,
    },
    Adaptive {
        count: Option<usize>,
    },
}

impl SessionRequest {
    pub fn mode(&self) -> SessionMode {
        match self {
            SessionRequest::Practice { .. } => SessionMode::Practice,
            SessionRequest::Exam { .. } => SessionMode::Exam,
            SessionRequest::Adaptive { .. } => SessionMode::Adaptive,
        }
    }
}

/// Input for the StartSession use case
#[derive(Debug, Clone)]
pub struct StartSessionInput {
    pub request: SessionRequest,
    /// Fixed seed for reproducible sessions; the clock is used when absent
    pub seed: Option<u64>,
}

impl StartSessionInput {
    pub fn new(request: SessionRequest) -> Self {
        Self {
            request,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Seed derived from the wall clock, for sessions without an explicit seed
pub fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

/// Use case for assembling a new session
pub struct StartSessionUseCase<B, P>
where
    B: QuestionBankPort + 'static,
    P: ProgressRepository + 'static,
{
    bank: Arc<B>,
    progress: Arc<P>,
    params: SessionParams,
}

impl<B, P> StartSessionUseCase<B, P>
where
    B: QuestionBankPort + 'static,
    P: ProgressRepository + 'static,
{
    pub fn new(bank: Arc<B>, progress: Arc<P>, params: SessionParams) -> Self {
        Self {
            bank,
            progress,
            params,
        }
    }

    pub async fn execute(
        &self,
        input: StartSessionInput,
    ) -> Result<AssembledSession, StartSessionError> {
        let bank = self.bank.load_bank().await?;
        if bank.is_empty() {
            warn!(
                "Question bank is empty: {}",
                self.bank.source_description()
            );
        }
        let record = self.progress.load().await?;
        let seed = input.seed.unwrap_or_else(clock_seed);
        let mode = input.request.mode();

        debug!(
            "Assembling {} session from {} questions (seed {})",
            mode,
            bank.len(),
            seed
        );

        let session = match input.request {
            SessionRequest::Practice { domain, count } => {
                let config = self.params.practice_config(domain, count);
                let questions = assemble_practice_session(&bank, &record.history, &config, seed);
                AssembledSession::new(mode, seed, questions)
            }
            SessionRequest::Exam { preset, count } => {
                let config = self.params.exam_config(preset, count);
                let minutes = self.params.preset_size(preset).time_limit_minutes;
                let questions = assemble_exam_session(&bank, &record.history, &config, seed);
                AssembledSession::new(mode, seed, questions).with_time_limit(minutes)
            }
            SessionRequest::Adaptive { count } => {
                let config = self.params.adaptive_config(count);
                let questions =
                    assemble_adaptive_session(&bank, &record.weak_domains, &config, seed);
                AssembledSession::new(mode, seed, questions)
            }
        };

        info!(
            "Assembled {} session with {} questions",
            session.mode,
            session.len()
        );
        Ok(session)
    }
}
