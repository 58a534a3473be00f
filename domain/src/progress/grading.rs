//! Session grading

use crate::core::domain::Domain;
use crate::core::error::DomainError;
use crate::session::assembled::AssembledQuestion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rounded percentage, 0 when `total` is 0
pub(crate) fn percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(total) * 100.0).round() as u32
}

/// Correct / total for one domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTally {
    pub correct: u32,
    pub total: u32,
}

impl DomainTally {
    pub fn percent(&self) -> u32 {
        percent(self.correct, self.total)
    }
}

/// Result of grading one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    pub correct: u32,
    pub total: u32,
    pub percent: u32,
    pub by_domain: BTreeMap<Domain, DomainTally>,
}

/// Grade a session.
///
/// `responses[i]` is the presented index chosen for question `i`, or
/// `None` when skipped (counted as wrong).
pub fn grade_session(
    questions: &[AssembledQuestion],
    responses: &[Option<usize>],
) -> Result<SessionScore, DomainError> {
    if questions.len() != responses.len() {
        return Err(DomainError::ResponseCountMismatch {
            expected: questions.len(),
            actual: responses.len(),
        });
    }

    let mut score = SessionScore::default();
    for (question, response) in questions.iter().zip(responses) {
        if let Some(index) = *response
            && index >= question.shuffled_choices.len()
        {
            return Err(DomainError::ResponseOutOfRange {
                question_id: question.id().to_string(),
                index,
            });
        }

        let ok = response.is_some_and(|index| question.is_correct(index));
        let tally = score.by_domain.entry(question.question.domain).or_default();
        tally.total += 1;
        score.total += 1;
        if ok {
            tally.correct += 1;
            score.correct += 1;
        }
    }
    score.percent = percent(score.correct, score.total);
    Ok(score)
}
