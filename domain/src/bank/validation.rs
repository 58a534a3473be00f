//! Bank validation.
//!
//! Checks a bank before it is trusted for session assembly: unique ids,
//! domain coverage, per-domain count bounds, difficulty ratios, and the
//! house style of deep rationales.
//!
//! # Examples
//!
//! ```
//! use prep_domain::bank::{BankPolicy, validate_bank};
//!
//! let report = validate_bank(&[], &BankPolicy::default());
//! assert!(!report.passed()); // empty bank misses every domain
//! ```

use crate::core::difficulty::Difficulty;
use crate::core::domain::Domain;
use crate::core::question::Question;
use crate::session::config::DifficultyMix;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Phrases that must not appear in a deep rationale
pub const BANNED_RATIONALE_PHRASES: [&str; 2] =
    ["Based on source material", "According to the guide"];

/// Severity level of a bank issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The bank must not be used.
    Error,
    /// Editorial problem; the bank still works.
    Warning,
}

/// Identifies a specific bank issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BankIssueCode {
    DuplicateId { id: String },
    MissingDomain { domain: Domain },
    TooFewQuestions { total: usize, minimum: usize },
    DomainCountOutOfRange { domain: Domain, count: usize },
    DifficultyRatioOutOfTolerance { difficulty: Difficulty, ratio: f64, target: f64 },
    RationaleFormat { id: String },
    BannedPhrase { id: String, phrase: String },
}

/// A detected issue in the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankIssue {
    pub severity: Severity,
    pub code: BankIssueCode,
    pub message: String,
}

impl BankIssue {
    fn error(code: BankIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
        }
    }

    fn warning(code: BankIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }
}

/// Thresholds a bank must meet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankPolicy {
    pub min_total: usize,
    pub min_per_domain: usize,
    pub max_per_domain: usize,
    pub target_mix: DifficultyMix,
    /// Allowed absolute deviation of each difficulty ratio
    pub ratio_tolerance: f64,
    pub check_rationale: bool,
}

impl Default for BankPolicy {
    fn default() -> Self {
        Self {
            min_total: 500,
            min_per_domain: 80,
            max_per_domain: 85,
            target_mix: DifficultyMix::default(),
            ratio_tolerance: 0.03,
            check_rationale: true,
        }
    }
}

/// Counts and issues for one bank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankReport {
    pub total: usize,
    pub domain_counts: BTreeMap<Domain, usize>,
    pub difficulty_counts: BTreeMap<Difficulty, usize>,
    pub issues: Vec<BankIssue>,
}

impl BankReport {
    /// True when no error-level issue was found
    pub fn passed(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn difficulty_ratio(&self, difficulty: Difficulty) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.difficulty_counts.get(&difficulty).copied().unwrap_or(0) as f64 / self.total as f64
    }

    pub fn errors(&self) -> impl Iterator<Item = &BankIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &BankIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }
}

/// Validate a bank against a policy
pub fn validate_bank(bank: &[Question], policy: &BankPolicy) -> BankReport {
    let mut report = BankReport {
        total: bank.len(),
        domain_counts: Domain::ALL.iter().map(|d| (*d, 0)).collect(),
        difficulty_counts: Difficulty::ALL.iter().map(|d| (*d, 0)).collect(),
        issues: Vec::new(),
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for q in bank {
        *report.domain_counts.entry(q.domain).or_insert(0) += 1;
        *report.difficulty_counts.entry(q.difficulty).or_insert(0) += 1;

        if !seen.insert(q.id.as_str()) {
            report.issues.push(BankIssue::error(
                BankIssueCode::DuplicateId { id: q.id.clone() },
                format!("Duplicate question id: {}", q.id),
            ));
        }

        if policy.check_rationale {
            check_rationale(q, &mut report.issues);
        }
    }

    if report.total < policy.min_total {
        report.issues.push(BankIssue::error(
            BankIssueCode::TooFewQuestions {
                total: report.total,
                minimum: policy.min_total,
            },
            format!(
                "Bank has {} questions, fewer than {}",
                report.total, policy.min_total
            ),
        ));
    }

    for (&domain, &count) in &report.domain_counts {
        if count == 0 {
            report.issues.push(BankIssue::error(
                BankIssueCode::MissingDomain { domain },
                format!("Domain {} has no questions", domain),
            ));
        } else if count < policy.min_per_domain || count > policy.max_per_domain {
            report.issues.push(BankIssue::error(
                BankIssueCode::DomainCountOutOfRange { domain, count },
                format!(
                    "Domain {} not in {}-{} range: {}",
                    domain, policy.min_per_domain, policy.max_per_domain, count
                ),
            ));
        }
    }

    if report.total > 0 {
        for difficulty in Difficulty::ALL {
            let ratio = report.difficulty_ratio(difficulty);
            let target = policy.target_mix.fraction(difficulty);
            if (ratio - target).abs() > policy.ratio_tolerance {
                report.issues.push(BankIssue::error(
                    BankIssueCode::DifficultyRatioOutOfTolerance {
                        difficulty,
                        ratio,
                        target,
                    },
                    format!(
                        "{} ratio {:.3} is outside {:.2} ± {:.2}",
                        difficulty, ratio, target, policy.ratio_tolerance
                    ),
                ));
            }
        }
    }

    report
}

fn check_rationale(q: &Question, issues: &mut Vec<BankIssue>) {
    let deep = &q.rationale.deep;
    let expected_prefix = format!(
        "The correct answer is {} because in {}, section",
        q.correct_answer, q.domain
    );
    if !deep.starts_with(&expected_prefix) {
        issues.push(BankIssue::warning(
            BankIssueCode::RationaleFormat { id: q.id.clone() },
            format!("Rationale format mismatch for {}", q.id),
        ));
    }

    for phrase in BANNED_RATIONALE_PHRASES {
        if deep.contains(phrase) {
            issues.push(BankIssue::warning(
                BankIssueCode::BannedPhrase {
                    id: q.id.clone(),
                    phrase: phrase.to_string(),
                },
                format!("Banned rationale phrase in {}: '{}'", q.id, phrase),
            ));
        }
    }
}
