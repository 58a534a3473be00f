//! Recently served question ids

use crate::session::assembled::SessionMode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Record of recently served question ids, kept by the caller.
///
/// The assemblers only read it. Order matters solely for trimming the
/// oldest entries when the caller records a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionHistory {
    pub recent_exam_question_ids: Vec<String>,
    pub recent_practice_question_ids: Vec<String>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_practice_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recent_practice_question_ids
            .extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_exam_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recent_exam_question_ids
            .extend(ids.into_iter().map(Into::into));
        self
    }

    /// Ids recently served in practice sessions
    pub fn practice_set(&self) -> HashSet<&str> {
        self.recent_practice_question_ids
            .iter()
            .map(String::as_str)
            .collect()
    }

    /// Ids recently served in exam sessions
    pub fn exam_set(&self) -> HashSet<&str> {
        self.recent_exam_question_ids
            .iter()
            .map(String::as_str)
            .collect()
    }

    /// Append served ids to the list for `mode`, keeping at most
    /// `capacity` distinct ids (newest last). Adaptive sessions count as
    /// practice.
    pub fn remember<'a, I>(&mut self, mode: SessionMode, served: I, capacity: usize)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let list = match mode {
            SessionMode::Exam => &mut self.recent_exam_question_ids,
            SessionMode::Practice | SessionMode::Adaptive => &mut self.recent_practice_question_ids,
        };

        for id in served {
            list.retain(|existing| existing != id);
            list.push(id.to_string());
        }

        if list.len() > capacity {
            let excess = list.len() - capacity;
            list.drain(..excess);
        }
    }
}
