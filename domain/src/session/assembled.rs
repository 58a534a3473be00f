//! Assembled (presentable) questions and sessions

use crate::core::question::{ChoiceLabel, Question};
use serde::{Deserialize, Serialize};

/// Kind of session being assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    Practice,
    Exam,
    Adaptive,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::Practice => "practice",
            SessionMode::Exam => "exam",
            SessionMode::Adaptive => "adaptive",
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One choice in presentation order, keeping its original label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedChoice {
    pub key: ChoiceLabel,
    pub text: String,
}

/// A question paired with a randomized choice order.
///
/// Invariant: `shuffled_choices[remapped_correct_answer].key ==
/// question.correct_answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledQuestion {
    #[serde(flatten)]
    pub question: Question,
    pub shuffled_choices: Vec<PresentedChoice>,
    /// 0-based index into `shuffled_choices`
    pub remapped_correct_answer: usize,
}

impl AssembledQuestion {
    pub fn id(&self) -> &str {
        &self.question.id
    }

    /// The correct choice as presented
    pub fn correct_choice(&self) -> Option<&PresentedChoice> {
        self.shuffled_choices.get(self.remapped_correct_answer)
    }

    /// Whether a presented index is the correct one
    pub fn is_correct(&self, presented_index: usize) -> bool {
        presented_index == self.remapped_correct_answer
    }
}

/// The output of one assembly call, as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledSession {
    pub mode: SessionMode,
    /// Seed that reproduces this session
    pub seed: u64,
    /// Time limit for timed exams; the timer itself is a UI concern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<u32>,
    pub questions: Vec<AssembledQuestion>,
}

impl AssembledSession {
    pub fn new(mode: SessionMode, seed: u64, questions: Vec<AssembledQuestion>) -> Self {
        Self {
            mode,
            seed,
            time_limit_minutes: None,
            questions,
        }
    }

    pub fn with_time_limit(mut self, minutes: u32) -> Self {
        self.time_limit_minutes = Some(minutes);
        self
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(AssembledQuestion::id)
    }
}
