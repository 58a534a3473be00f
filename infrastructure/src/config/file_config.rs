//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use prep_application::{PresetSize, SessionParams};
use prep_domain::{BankPolicy, DifficultyMix, Domain, ProgressRules, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Bank file used when neither config nor CLI names one
pub const DEFAULT_BANK_FILE: &str = "question_bank.json";
const PROGRESS_FILE: &str = "progress.json";
const APP_DIR: &str = "dcf-prep";

/// Tolerance when checking that the difficulty mix sums to 1
const MIX_SUM_TOLERANCE: f64 = 0.01;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{field} cannot be 0")]
    ZeroValue { field: String },

    #[error("exam.domain_weights.{domain} is negative ({weight})")]
    NegativeWeight { domain: Domain, weight: f64 },

    #[error("exam.domain_weights gives every domain a weight of 0")]
    AllWeightsZero,

    #[error("exam.difficulty_mix sums to {sum:.2}, expected 1.0")]
    MixSum { sum: f64 },

    #[error("validation.min_per_domain ({min}) exceeds validation.max_per_domain ({max})")]
    PerDomainRange { min: usize, max: usize },

    #[error("progress_rules.weak_threshold ({0}) is above 100")]
    ThresholdAbove100(u32),
}

/// A validation finding with its severity
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }
}

/// Raw bank configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBankConfig {
    /// Path to the bank JSON file
    pub path: Option<String>,
}

/// Raw progress configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProgressConfig {
    /// Path to the progress JSON file (defaults to the user data dir)
    pub path: Option<String>,
}

/// Raw practice configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePracticeConfig {
    pub count: usize,
}

impl Default for FilePracticeConfig {
    fn default() -> Self {
        Self { count: 10 }
    }
}

/// Raw adaptive configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAdaptiveConfig {
    pub count: usize,
}

impl Default for FileAdaptiveConfig {
    fn default() -> Self {
        Self { count: 12 }
    }
}

/// Raw exam preset from TOML
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FilePresetConfig {
    pub count: usize,
    pub time_limit_minutes: u32,
}

/// Raw exam configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExamConfig {
    /// Weight overrides keyed by domain code
    pub domain_weights: BTreeMap<Domain, f64>,
    pub difficulty_mix: DifficultyMix,
    pub mini: FilePresetConfig,
    pub full: FilePresetConfig,
}

impl Default for FileExamConfig {
    fn default() -> Self {
        Self {
            domain_weights: BTreeMap::new(),
            difficulty_mix: DifficultyMix::default(),
            mini: FilePresetConfig {
                count: 15,
                time_limit_minutes: 20,
            },
            full: FilePresetConfig {
                count: 30,
                time_limit_minutes: 45,
            },
        }
    }
}

/// Raw history configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Recent ids kept per list
    pub capacity: usize,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self { capacity: 120 }
    }
}

/// Raw progress rules from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProgressRulesConfig {
    pub weak_threshold: u32,
}

impl Default for FileProgressRulesConfig {
    fn default() -> Self {
        Self { weak_threshold: 70 }
    }
}

/// Raw bank validation thresholds from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileValidationConfig {
    pub min_total: usize,
    pub min_per_domain: usize,
    pub max_per_domain: usize,
    pub ratio_tolerance: f64,
    pub check_rationale: bool,
}

impl Default for FileValidationConfig {
    fn default() -> Self {
        let policy = BankPolicy::default();
        Self {
            min_total: policy.min_total,
            min_per_domain: policy.min_per_domain,
            max_per_domain: policy.max_per_domain,
            ratio_tolerance: policy.ratio_tolerance,
            check_rationale: policy.check_rationale,
        }
    }
}

/// Output format as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    Text,
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub bank: FileBankConfig,
    pub progress: FileProgressConfig,
    pub practice: FilePracticeConfig,
    pub adaptive: FileAdaptiveConfig,
    pub exam: FileExamConfig,
    pub history: FileHistoryConfig,
    pub progress_rules: FileProgressRulesConfig,
    pub validation: FileValidationConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    ///
    /// Errors make the configuration unusable; warnings are reported and
    /// the value is used as given.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("history.capacity", self.history.capacity),
            ("exam.mini.count", self.exam.mini.count),
            ("exam.full.count", self.exam.full.count),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::error(ConfigValidationError::ZeroValue {
                    field: field.to_string(),
                }));
            }
        }
        for (field, value) in [
            ("practice.count", self.practice.count),
            ("adaptive.count", self.adaptive.count),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::warning(ConfigValidationError::ZeroValue {
                    field: field.to_string(),
                }));
            }
        }

        for (&domain, &weight) in &self.exam.domain_weights {
            if weight < 0.0 {
                issues.push(ConfigIssue::error(ConfigValidationError::NegativeWeight {
                    domain,
                    weight,
                }));
            }
        }
        if Domain::ALL
            .iter()
            .all(|d| self.exam.domain_weights.get(d).copied().unwrap_or(1.0) == 0.0)
        {
            issues.push(ConfigIssue::warning(ConfigValidationError::AllWeightsZero));
        }

        let sum = self.exam.difficulty_mix.sum();
        if (sum - 1.0).abs() > MIX_SUM_TOLERANCE {
            issues.push(ConfigIssue::warning(ConfigValidationError::MixSum { sum }));
        }

        if self.validation.min_per_domain > self.validation.max_per_domain {
            issues.push(ConfigIssue::error(ConfigValidationError::PerDomainRange {
                min: self.validation.min_per_domain,
                max: self.validation.max_per_domain,
            }));
        }

        if self.progress_rules.weak_threshold > 100 {
            issues.push(ConfigIssue::warning(
                ConfigValidationError::ThresholdAbove100(self.progress_rules.weak_threshold),
            ));
        }

        issues
    }

    /// Convert to the application's session parameters
    pub fn to_session_params(&self) -> SessionParams {
        SessionParams {
            practice_count: self.practice.count,
            adaptive_count: self.adaptive.count,
            mini_exam: PresetSize {
                total: self.exam.mini.count,
                time_limit_minutes: self.exam.mini.time_limit_minutes,
            },
            full_exam: PresetSize {
                total: self.exam.full.count,
                time_limit_minutes: self.exam.full.time_limit_minutes,
            },
            domain_weights: self.exam.domain_weights.clone(),
            difficulty_mix: Some(self.exam.difficulty_mix),
            rules: ProgressRules {
                weak_threshold: self.progress_rules.weak_threshold,
                history_capacity: self.history.capacity,
            },
            bank_policy: BankPolicy {
                min_total: self.validation.min_total,
                min_per_domain: self.validation.min_per_domain,
                max_per_domain: self.validation.max_per_domain,
                target_mix: self.exam.difficulty_mix,
                ratio_tolerance: self.validation.ratio_tolerance,
                check_rationale: self.validation.check_rationale,
            },
        }
    }

    /// Bank file path, falling back to `./question_bank.json`
    pub fn bank_path(&self) -> PathBuf {
        self.bank
            .path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BANK_FILE))
    }

    /// Progress file path, falling back to the user data directory
    pub fn progress_path(&self) -> Option<PathBuf> {
        match &self.progress.path {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|d| d.join(APP_DIR).join(PROGRESS_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[bank]
path = "banks/dcf_seed.json"

[progress]
path = "/tmp/progress.json"

[practice]
count = 20

[exam]
difficulty_mix = { easy = 0.2, medium = 0.5, hard = 0.3 }
full = { count = 40, time_limit_minutes = 60 }

[exam.domain_weights]
SNP = 2.0
HSAN = 0.5

[history]
capacity = 60

[progress_rules]
weak_threshold = 75

[validation]
min_total = 300
check_rationale = false

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bank_path(), PathBuf::from("banks/dcf_seed.json"));
        assert_eq!(config.practice.count, 20);
        assert_eq!(config.exam.domain_weights.get(&Domain::Snp), Some(&2.0));
        assert_eq!(config.exam.full.count, 40);
        assert_eq!(config.exam.mini.count, 15);
        assert_eq!(config.history.capacity, 60);
        assert_eq!(config.validation.min_total, 300);
        assert_eq!(config.validation.max_per_domain, 85);
        assert_eq!(config.output.format, Some(FileOutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[practice]\ncount = 5\n").unwrap();
        assert_eq!(config.practice.count, 5);
        assert_eq!(config.adaptive.count, 12);
        assert_eq!(config.history.capacity, 120);
        assert_eq!(config.bank_path(), PathBuf::from(DEFAULT_BANK_FILE));
    }

    #[test]
    fn test_unknown_domain_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[exam.domain_weights]\nXYZ = 1.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let mut config = FileConfig::default();
        config.history.capacity = 0;
        config.exam.domain_weights.insert(Domain::Caan, -1.0);
        config.exam.difficulty_mix = DifficultyMix {
            easy: 0.5,
            medium: 0.5,
            hard: 0.5,
        };
        config.validation.min_per_domain = 90;

        let issues = config.validate();
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.error.clone())
            .collect();
        assert!(errors.contains(&ConfigValidationError::ZeroValue {
            field: "history.capacity".to_string()
        }));
        assert!(errors.contains(&ConfigValidationError::PerDomainRange { min: 90, max: 85 }));
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::NegativeWeight {
                domain: Domain::Caan,
                ..
            }
        )));
        assert!(
            issues
                .iter()
                .any(|i| matches!(i.error, ConfigValidationError::MixSum { .. }))
        );
    }

    #[test]
    fn test_to_session_params() {
        let mut config = FileConfig::default();
        config.practice.count = 7;
        config.history.capacity = 50;
        config.exam.domain_weights.insert(Domain::Rnrf, 3.0);

        let params = config.to_session_params();
        assert_eq!(params.practice_count, 7);
        assert_eq!(params.rules.history_capacity, 50);
        assert_eq!(params.mini_exam.total, 15);
        assert_eq!(params.domain_weights.get(&Domain::Rnrf), Some(&3.0));
        assert_eq!(params.bank_policy.min_total, 500);
    }
}
