//! Session parameters - defaults the use cases fill requests from.
//!
//! [`SessionParams`] groups the static parameters that turn a CLI-level
//! request ("a mini exam") into a concrete domain config. These are
//! application-layer concerns, not domain policy.

use prep_domain::{
    AdaptiveConfig, BankPolicy, DifficultyMix, Domain, ExamConfig, ExamPreset, PracticeConfig,
    ProgressRules,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Question count and time limit of one exam preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSize {
    pub total: usize,
    pub time_limit_minutes: u32,
}

impl From<ExamPreset> for PresetSize {
    fn from(preset: ExamPreset) -> Self {
        Self {
            total: preset.total(),
            time_limit_minutes: preset.time_limit_minutes(),
        }
    }
}

/// Session defaults and rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Practice session size when the request leaves it open
    pub practice_count: usize,
    /// Adaptive session size when the request leaves it open
    pub adaptive_count: usize,
    pub mini_exam: PresetSize,
    pub full_exam: PresetSize,
    /// Exam domain weight overrides (default 1 per domain)
    pub domain_weights: BTreeMap<Domain, f64>,
    /// Exam difficulty mix (default 30/40/30)
    pub difficulty_mix: Option<DifficultyMix>,
    pub rules: ProgressRules,
    pub bank_policy: BankPolicy,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            practice_count: 10,
            adaptive_count: AdaptiveConfig::default().total,
            mini_exam: ExamPreset::Mini.into(),
            full_exam: ExamPreset::Full.into(),
            domain_weights: BTreeMap::new(),
            difficulty_mix: None,
            rules: ProgressRules::default(),
            bank_policy: BankPolicy::default(),
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_practice_count(mut self, count: usize) -> Self {
        self.practice_count = count;
        self
    }

    pub fn with_adaptive_count(mut self, count: usize) -> Self {
        self.adaptive_count = count;
        self
    }

    pub fn with_domain_weight(mut self, domain: Domain, weight: f64) -> Self {
        self.domain_weights.insert(domain, weight);
        self
    }

    pub fn with_difficulty_mix(mut self, mix: DifficultyMix) -> Self {
        self.difficulty_mix = Some(mix);
        self
    }

    pub fn with_rules(mut self, rules: ProgressRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_bank_policy(mut self, policy: BankPolicy) -> Self {
        self.bank_policy = policy;
        self
    }

    // ==================== Resolution ====================

    pub fn preset_size(&self, preset: ExamPreset) -> PresetSize {
        match preset {
            ExamPreset::Mini => self.mini_exam,
            ExamPreset::Full => self.full_exam,
        }
    }

    pub fn practice_config(&self, domain: Domain, count: Option<usize>) -> PracticeConfig {
        PracticeConfig::new(domain, count.unwrap_or(self.practice_count))
    }

    /// Exam config for a preset; an explicit count overrides the preset size
    pub fn exam_config(&self, preset: ExamPreset, count: Option<usize>) -> ExamConfig {
        ExamConfig {
            total: count.unwrap_or(self.preset_size(preset).total),
            domain_weights: self.domain_weights.clone(),
            difficulty_mix: self.difficulty_mix,
        }
    }

    pub fn adaptive_config(&self, count: Option<usize>) -> AdaptiveConfig {
        AdaptiveConfig {
            total: count.unwrap_or(self.adaptive_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SessionParams::default();
        assert_eq!(params.practice_count, 10);
        assert_eq!(params.adaptive_count, 12);
        assert_eq!(params.mini_exam.total, 15);
        assert_eq!(params.full_exam.time_limit_minutes, 45);
    }

    #[test]
    fn test_exam_config_uses_preset_and_overrides() {
        let params = SessionParams::default().with_domain_weight(Domain::Snp, 2.0);
        let config = params.exam_config(ExamPreset::Mini, None);
        assert_eq!(config.total, 15);
        assert_eq!(config.domain_weight(Domain::Snp), 2.0);

        let config = params.exam_config(ExamPreset::Full, Some(40));
        assert_eq!(config.total, 40);
    }

    #[test]
    fn test_practice_and_adaptive_counts() {
        let params = SessionParams::default()
            .with_practice_count(5)
            .with_adaptive_count(8);
        assert_eq!(params.practice_config(Domain::Caan, None).total, 5);
        assert_eq!(params.practice_config(Domain::Caan, Some(3)).total, 3);
        assert_eq!(params.adaptive_config(None).total, 8);
    }
}
