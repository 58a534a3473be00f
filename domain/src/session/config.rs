//! Session configuration value objects

use crate::core::difficulty::Difficulty;
use crate::core::domain::Domain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Single-domain practice session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeConfig {
    pub domain: Domain,
    pub total: usize,
}

impl PracticeConfig {
    pub fn new(domain: Domain, total: usize) -> Self {
        Self { domain, total }
    }
}

/// Fractions of an exam drawn from each difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyMix {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl Default for DifficultyMix {
    fn default() -> Self {
        Self {
            easy: 0.30,
            medium: 0.40,
            hard: 0.30,
        }
    }
}

impl DifficultyMix {
    pub fn fraction(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Sum of the three fractions (1.0 for a well-formed mix)
    pub fn sum(&self) -> f64 {
        self.easy + self.medium + self.hard
    }
}

/// Per-difficulty question counts for one exam
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTargets {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyTargets {
    /// Round easy and medium independently; hard absorbs the remainder
    /// and is clamped at zero.
    pub fn from_mix(total: usize, mix: &DifficultyMix) -> Self {
        // negative or NaN products saturate to 0 in the cast
        let easy = (total as f64 * mix.easy).round() as usize;
        let medium = (total as f64 * mix.medium).round() as usize;
        let hard = total.saturating_sub(easy).saturating_sub(medium);
        Self { easy, medium, hard }
    }

    pub fn get(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Mixed-domain exam session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamConfig {
    pub total: usize,
    /// Overrides of the default weight (1.0) per domain
    #[serde(default)]
    pub domain_weights: BTreeMap<Domain, f64>,
    /// Defaults to 30/40/30 when absent
    #[serde(default)]
    pub difficulty_mix: Option<DifficultyMix>,
}

impl ExamConfig {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn with_domain_weight(mut self, domain: Domain, weight: f64) -> Self {
        self.domain_weights.insert(domain, weight);
        self
    }

    pub fn with_difficulty_mix(mut self, mix: DifficultyMix) -> Self {
        self.difficulty_mix = Some(mix);
        self
    }

    /// Weight for a domain after merging overrides over the default of 1
    pub fn domain_weight(&self, domain: Domain) -> f64 {
        self.domain_weights.get(&domain).copied().unwrap_or(1.0)
    }

    pub fn resolved_mix(&self) -> DifficultyMix {
        self.difficulty_mix.unwrap_or_default()
    }

    pub fn targets(&self) -> DifficultyTargets {
        DifficultyTargets::from_mix(self.total, &self.resolved_mix())
    }
}

/// Session targeting weak domains and harder questions first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveConfig {
    pub total: usize,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self { total: 12 }
    }
}

/// Standard exam sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamPreset {
    /// 15 questions, 20 minutes
    Mini,
    /// 30 questions, 45 minutes
    #[default]
    Full,
}

impl ExamPreset {
    pub fn total(&self) -> usize {
        match self {
            ExamPreset::Mini => 15,
            ExamPreset::Full => 30,
        }
    }

    pub fn time_limit_minutes(&self) -> u32 {
        match self {
            ExamPreset::Mini => 20,
            ExamPreset::Full => 45,
        }
    }
}

impl std::str::FromStr for ExamPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mini" => Ok(ExamPreset::Mini),
            "full" => Ok(ExamPreset::Full),
            _ => Err(format!("Unknown exam size: {}. Valid: mini, full", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_for_thirty() {
        let targets = ExamConfig::new(30).targets();
        assert_eq!(
            targets,
            DifficultyTargets {
                easy: 9,
                medium: 12,
                hard: 9
            }
        );
    }

    #[test]
    fn test_hard_absorbs_rounding() {
        // 0.3*15 = 4.5 -> 5, 0.4*15 = 6 -> 6, hard = 4
        let targets = ExamConfig::new(15).targets();
        assert_eq!((targets.easy, targets.medium, targets.hard), (5, 6, 4));
    }

    #[test]
    fn test_hard_clamped_at_zero() {
        let mix = DifficultyMix {
            easy: 0.7,
            medium: 0.7,
            hard: 0.0,
        };
        let targets = DifficultyTargets::from_mix(10, &mix);
        assert_eq!((targets.easy, targets.medium, targets.hard), (7, 7, 0));
    }

    #[test]
    fn test_negative_fraction_counts_as_zero() {
        let mix = DifficultyMix {
            easy: -0.5,
            medium: 0.5,
            hard: 1.0,
        };
        let targets = DifficultyTargets::from_mix(10, &mix);
        assert_eq!((targets.easy, targets.medium, targets.hard), (0, 5, 5));
    }

    #[test]
    fn test_domain_weight_defaults_to_one() {
        let config = ExamConfig::new(10).with_domain_weight(Domain::Snp, 3.0);
        assert_eq!(config.domain_weight(Domain::Snp), 3.0);
        assert_eq!(config.domain_weight(Domain::Caan), 1.0);
    }

    #[test]
    fn test_exam_config_deserialize_defaults() {
        let config: ExamConfig = serde_json::from_str(r#"{"total": 12}"#).unwrap();
        assert!(config.domain_weights.is_empty());
        assert_eq!(config.resolved_mix(), DifficultyMix::default());
    }

    #[test]
    fn test_presets() {
        assert_eq!(ExamPreset::Mini.total(), 15);
        assert_eq!(ExamPreset::Full.time_limit_minutes(), 45);
        assert_eq!("MINI".parse::<ExamPreset>().unwrap(), ExamPreset::Mini);
        assert!("huge".parse::<ExamPreset>().is_err());
    }
}
