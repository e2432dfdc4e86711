//! AnswerSet - the completed questionnaire submission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{AnswerValue, QuestionId};

/// A mapping from question id to the chosen answer value, delivered to
/// the engine only once the questionnaire is complete.
///
/// Backed by a `BTreeMap` so iteration order is deterministic, which in
/// turn keeps every derived narrative ordering reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer to the same question.
    pub fn record(&mut self, id: QuestionId, value: AnswerValue) {
        self.answers.insert(id, value);
    }

    /// Returns the recorded answer for a question, if any.
    pub fn get(&self, id: &QuestionId) -> Option<AnswerValue> {
        self.answers.get(id).copied()
    }

    /// Removes an answer. Returns the removed value, if it was present.
    pub fn remove(&mut self, id: &QuestionId) -> Option<AnswerValue> {
        self.answers.remove(id)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no questions have been answered.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates answers in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, AnswerValue)> {
        self.answers.iter().map(|(id, value)| (id, *value))
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
