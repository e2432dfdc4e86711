//! Error taxonomy for profile computation.

use thiserror::Error;

use crate::domain::foundation::{QuestionId, RiskDimension};

use super::RiskCategory;

/// Errors raised while computing a risk profile.
///
/// All of these are local validation failures. Retrying with the same
/// input reproduces the same error. `MissingAnswer` is the only one a
/// caller should surface to the end user ("please complete all
/// questions"); the rest are deployment-configuration defects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("No answer recorded for question '{question_id}'")]
    MissingAnswer { question_id: QuestionId },

    #[error("Total weight of the {dimension} question set is zero; scores cannot be normalized")]
    DegenerateCatalog { dimension: RiskDimension },

    #[error("The {dimension} question set is empty")]
    EmptyCategory { dimension: RiskDimension },

    #[error("Allocation row for {category} sums to {total}, expected 100")]
    InvalidAllocationTable { category: RiskCategory, total: u32 },
}

impl AssessmentError {
    /// Creates a missing answer error for a question.
    pub fn missing_answer(question_id: QuestionId) -> Self {
        AssessmentError::MissingAnswer { question_id }
    }
}
