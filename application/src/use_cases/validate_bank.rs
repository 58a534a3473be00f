//! Validate bank use case

use crate::ports::question_bank::{BankSourceError, QuestionBankPort};
use prep_domain::{BankPolicy, BankReport, validate_bank};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for checking a bank against a [`BankPolicy`]
pub struct ValidateBankUseCase<B: QuestionBankPort + 'static> {
    bank: Arc<B>,
    policy: BankPolicy,
}

impl<B: QuestionBankPort + 'static> ValidateBankUseCase<B> {
    pub fn new(bank: Arc<B>, policy: BankPolicy) -> Self {
        Self { bank, policy }
    }

    pub async fn execute(&self) -> Result<BankReport, BankSourceError> {
        let bank = self.bank.load_bank().await?;
        let report = validate_bank(&bank, &self.policy);

        if report.passed() {
            info!(
                "Bank {} passed validation ({} questions)",
                self.bank.source_description(),
                report.total
            );
        } else {
            warn!(
                "Bank {} failed validation with {} error(s)",
                self.bank.source_description(),
                report.errors().count()
            );
        }
        Ok(report)
    }
}
