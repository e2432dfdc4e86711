//! Category scorer - reduces one question set's answers to a normalized score.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{AnswerSet, Question};
use crate::domain::foundation::RiskDimension;

use super::AssessmentError;

/// Weighted score for one assessment dimension, normalized to the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Weighted sum of the chosen answer values.
    pub raw_score: f64,
    /// Weighted sum if every answer had been 5.
    pub max_possible: f64,
    /// `raw / max * 5`, rounded to two decimals. In [1.0, 5.0].
    pub normalized: f64,
}

impl CategoryScore {
    /// Builds a score from the weighted sums. `max_possible` must be positive.
    pub fn new(raw_score: f64, max_possible: f64) -> Self {
        Self {
            raw_score,
            max_possible,
            normalized: round2(raw_score / max_possible * 5.0),
        }
    }
}

/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores one question set against a completed answer set.
///
/// Every question must be answered; the first unanswered question (in
/// catalog order) is reported by id. A question set whose weights sum
/// to zero cannot be normalized and is rejected as degenerate.
pub fn score_category(
    dimension: RiskDimension,
    questions: &[Question],
    answers: &AnswerSet,
) -> Result<CategoryScore, AssessmentError> {
    let mut raw: u64 = 0;
    let mut max: u64 = 0;

    for question in questions {
        let answer = answers
            .get(&question.id)
            .ok_or_else(|| AssessmentError::missing_answer(question.id.clone()))?;
        let weight = question.weight.value() as u64;
        raw += answer.value() as u64 * weight;
        max += 5 * weight;
    }

    if max == 0 {
        return Err(AssessmentError::DegenerateCatalog { dimension });
    }

    Ok(CategoryScore::new(raw as f64, max as f64))
}
