//! Question entity and its four labeled choices

use crate::core::difficulty::Difficulty;
use crate::core::domain::Domain;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Label of one of the four answer choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChoiceLabel {
    A,
    B,
    C,
    D,
}

impl ChoiceLabel {
    /// The labels in their original (unshuffled) order
    pub const ALL: [ChoiceLabel; 4] = [ChoiceLabel::A, ChoiceLabel::B, ChoiceLabel::C, ChoiceLabel::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceLabel::A => "A",
            ChoiceLabel::B => "B",
            ChoiceLabel::C => "C",
            ChoiceLabel::D => "D",
        }
    }
}

impl std::fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ChoiceLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(ChoiceLabel::A),
            "B" => Ok(ChoiceLabel::B),
            "C" => Ok(ChoiceLabel::C),
            "D" => Ok(ChoiceLabel::D),
            _ => Err(DomainError::UnknownChoiceLabel(s.to_string())),
        }
    }
}

/// Exactly four answer texts keyed by label.
///
/// Storing the four texts as fields makes a question with a missing or
/// duplicated label unrepresentable once the bank has been parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choices {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl Choices {
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
        d: impl Into<String>,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
        }
    }

    /// Get the text for a label
    pub fn text(&self, label: ChoiceLabel) -> &str {
        match label {
            ChoiceLabel::A => &self.a,
            ChoiceLabel::B => &self.b,
            ChoiceLabel::C => &self.c,
            ChoiceLabel::D => &self.d,
        }
    }
}

/// Short and deep explanation of the correct answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rationale {
    pub short: String,
    pub deep: String,
}

/// Where the question was sourced from (not used by session assembly)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provenance {
    pub zip: String,
    pub document: String,
    pub section: String,
}

/// A question from the bank (Entity)
///
/// Immutable once loaded. Field names follow the bank file schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub domain: Domain,
    pub difficulty: Difficulty,
    /// Prompt text
    pub question: String,
    pub choices: Choices,
    pub correct_answer: ChoiceLabel,
    #[serde(default)]
    pub rationale: Rationale,
    #[serde(default)]
    pub source: Provenance,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Question {
    /// Create a question with empty rationale, provenance and tags
    pub fn new(
        id: impl Into<String>,
        domain: Domain,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        choices: Choices,
        correct_answer: ChoiceLabel,
    ) -> Self {
        Self {
            id: id.into(),
            domain,
            difficulty,
            question: prompt.into(),
            choices,
            correct_answer,
            rationale: Rationale::default(),
            source: Provenance::default(),
            tags: Vec::new(),
        }
    }

    pub fn with_rationale(mut self, short: impl Into<String>, deep: impl Into<String>) -> Self {
        self.rationale = Rationale {
            short: short.into(),
            deep: deep.into(),
        };
        self
    }

    /// Text of the correct choice
    pub fn correct_text(&self) -> &str {
        self.choices.text(self.correct_answer)
    }
}
