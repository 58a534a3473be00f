//! Per-user progress record

use crate::core::domain::Domain;
use crate::progress::grading::{DomainTally, SessionScore, percent};
use crate::session::assembled::SessionMode;
use crate::session::history::SessionHistory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of recent exam attempts considered for the consistency boost
const CONSISTENCY_WINDOW: usize = 5;
/// Score an exam attempt needs to count towards the boost
const CONSISTENCY_PASS_SCORE: u32 = 70;
const CONSISTENCY_POINTS: u32 = 3;
const CONSISTENCY_CAP: u32 = 15;

/// Rules applied when a finished session is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRules {
    /// Domains whose accuracy falls below this percentage are weak
    pub weak_threshold: u32,
    /// Maximum ids kept per recent-history list
    pub history_capacity: usize,
}

impl Default for ProgressRules {
    fn default() -> Self {
        Self {
            weak_threshold: 70,
            history_capacity: 120,
        }
    }
}

/// One finished exam
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamAttempt {
    pub when: DateTime<Utc>,
    pub score: u32,
    pub by_domain: BTreeMap<Domain, DomainTally>,
}

/// Everything remembered about one user between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    pub history: SessionHistory,
    pub total_answered: u32,
    pub total_correct: u32,
    /// Latest accuracy percentage per domain
    pub domain_accuracy: BTreeMap<Domain, u32>,
    pub weak_domains: Vec<Domain>,
    pub exam_history: Vec<ExamAttempt>,
}

impl ProgressRecord {
    /// Fold a graded session into the record
    pub fn record_session<'a, I>(
        &mut self,
        mode: SessionMode,
        score: &SessionScore,
        served_ids: I,
        now: DateTime<Utc>,
        rules: &ProgressRules,
    ) where
        I: IntoIterator<Item = &'a str>,
    {
        self.total_answered += score.total;
        self.total_correct += score.correct;

        for (domain, tally) in &score.by_domain {
            self.domain_accuracy.insert(*domain, tally.percent());
        }
        self.weak_domains = self
            .domain_accuracy
            .iter()
            .filter(|(_, accuracy)| **accuracy < rules.weak_threshold)
            .map(|(domain, _)| *domain)
            .collect();

        if mode == SessionMode::Exam {
            self.exam_history.push(ExamAttempt {
                when: now,
                score: score.percent,
                by_domain: score.by_domain.clone(),
            });
        }

        self.history
            .remember(mode, served_ids, rules.history_capacity);
    }

    /// Overall accuracy percentage across everything answered
    pub fn readiness_percent(&self) -> u32 {
        percent(self.total_correct, self.total_answered)
    }

    /// Readiness scaled down and boosted by recent passing exams, capped at 99
    pub fn pass_likelihood(&self) -> u32 {
        let recent_passes = self
            .exam_history
            .iter()
            .rev()
            .take(CONSISTENCY_WINDOW)
            .filter(|attempt| attempt.score >= CONSISTENCY_PASS_SCORE)
            .count() as u32;
        let boost = (recent_passes * CONSISTENCY_POINTS).min(CONSISTENCY_CAP);
        let raw = (f64::from(self.readiness_percent()) * 0.85 + f64::from(boost)).round();
        raw.clamp(0.0, 99.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(entries: &[(Domain, u32, u32)]) -> SessionScore {
        let mut score = SessionScore::default();
        for &(domain, correct, total) in entries {
            score.by_domain.insert(domain, DomainTally { correct, total });
            score.correct += correct;
            score.total += total;
        }
        score.percent = percent(score.correct, score.total);
        score
    }

    #[test]
    fn test_empty_record() {
        let record = ProgressRecord::default();
        assert_eq!(record.readiness_percent(), 0);
        assert_eq!(record.pass_likelihood(), 0);
    }

    #[test]
    fn test_record_practice_updates_totals_and_weak_domains() {
        let mut record = ProgressRecord::default();
        let s = score(&[(Domain::Snp, 1, 4), (Domain::Caan, 3, 3)]);
        record.record_session(
            SessionMode::Practice,
            &s,
            ["a", "b"],
            Utc::now(),
            &ProgressRules::default(),
        );

        assert_eq!(record.total_answered, 7);
        assert_eq!(record.total_correct, 4);
        assert_eq!(record.domain_accuracy[&Domain::Snp], 25);
        assert_eq!(record.domain_accuracy[&Domain::Caan], 100);
        assert_eq!(record.weak_domains, vec![Domain::Snp]);
        assert!(record.exam_history.is_empty());
        assert_eq!(record.history.recent_practice_question_ids, vec!["a", "b"]);
    }

    #[test]
    fn test_accuracy_overwritten_per_session() {
        let mut record = ProgressRecord::default();
        let rules = ProgressRules::default();
        record.record_session(
            SessionMode::Practice,
            &score(&[(Domain::Snp, 0, 2)]),
            std::iter::empty(),
            Utc::now(),
            &rules,
        );
        assert_eq!(record.weak_domains, vec![Domain::Snp]);
        record.record_session(
            SessionMode::Practice,
            &score(&[(Domain::Snp, 2, 2)]),
            std::iter::empty(),
            Utc::now(),
            &rules,
        );
        assert!(record.weak_domains.is_empty());
    }

    #[test]
    fn test_exam_appends_attempt() {
        let mut record = ProgressRecord::default();
        let now = Utc::now();
        record.record_session(
            SessionMode::Exam,
            &score(&[(Domain::Hsan, 8, 10)]),
            ["x"],
            now,
            &ProgressRules::default(),
        );
        assert_eq!(record.exam_history.len(), 1);
        assert_eq!(record.exam_history[0].score, 80);
        assert_eq!(record.exam_history[0].when, now);
        assert_eq!(record.history.recent_exam_question_ids, vec!["x"]);
    }

    #[test]
    fn test_pass_likelihood_boost() {
        let mut record = ProgressRecord {
            total_answered: 100,
            total_correct: 80,
            ..ProgressRecord::default()
        };
        // 80 * 0.85 = 68
        assert_eq!(record.pass_likelihood(), 68);

        for score in [90, 50, 75, 70, 100, 20] {
            record.exam_history.push(ExamAttempt {
                when: Utc::now(),
                score,
                by_domain: BTreeMap::new(),
            });
        }
        // last five: 50, 75, 70, 100, 20 -> 3 passes -> +9
        assert_eq!(record.pass_likelihood(), 77);
    }

    #[test]
    fn test_pass_likelihood_capped() {
        let mut record = ProgressRecord {
            total_answered: 10,
            total_correct: 10,
            ..ProgressRecord::default()
        };
        for _ in 0..5 {
            record.exam_history.push(ExamAttempt {
                when: Utc::now(),
                score: 100,
                by_domain: BTreeMap::new(),
            });
        }
        // 85 + 15 = 100 -> capped
        assert_eq!(record.pass_likelihood(), 99);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let record: ProgressRecord = serde_json::from_str(r#"{"total_answered": 4}"#).unwrap();
        assert_eq!(record.total_answered, 4);
        assert!(record.exam_history.is_empty());
        assert_eq!(record.history, SessionHistory::default());
    }
}
