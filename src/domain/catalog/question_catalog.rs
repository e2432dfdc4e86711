//! QuestionCatalog - the versioned question sets supplied to the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{CatalogVersion, RiskDimension, ValidationError};

use super::Question;

/// The three ordered question sets for one deployed catalog revision.
///
/// Read-only after load. Callers swapping in a new revision at runtime
/// must treat the swap as atomic so a single profile computation never
/// mixes versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    pub version: CatalogVersion,
    pub capacity: Vec<Question>,
    pub willingness: Vec<Question>,
    pub bias: Vec<Question>,
}

impl QuestionCatalog {
    /// Creates a catalog from its three question sets.
    pub fn new(
        version: CatalogVersion,
        capacity: Vec<Question>,
        willingness: Vec<Question>,
        bias: Vec<Question>,
    ) -> Self {
        Self {
            version,
            capacity,
            willingness,
            bias,
        }
    }

    /// Returns the question set for a dimension.
    pub fn questions(&self, dimension: RiskDimension) -> &[Question] {
        match dimension {
            RiskDimension::Capacity => &self.capacity,
            RiskDimension::Willingness => &self.willingness,
            RiskDimension::Bias => &self.bias,
        }
    }

    /// Total number of questions across all three sets.
    pub fn len(&self) -> usize {
        self.capacity.len() + self.willingness.len() + self.bias.len()
    }

    /// Returns true if every question set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Structural validation, run once at catalog load.
    ///
    /// Checks that the version is set, every set is non-empty, ids are
    /// unique and non-empty, each question carries ascending options,
    /// dimension tags match the set the question sits in, and every
    /// bias question names its bias category.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.version.as_str().trim().is_empty() {
            return Err(ValidationError::empty_field("catalog version"));
        }

        let mut seen = HashSet::new();
        for dimension in [
            RiskDimension::Capacity,
            RiskDimension::Willingness,
            RiskDimension::Bias,
        ] {
            let questions = self.questions(dimension);
            if questions.is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "{} questions",
                    dimension
                )));
            }

            for question in questions {
                if question.id.as_str().trim().is_empty() {
                    return Err(ValidationError::empty_field("question id"));
                }
                if !seen.insert(question.id.clone()) {
                    return Err(ValidationError::duplicate(
                        "question id",
                        question.id.as_str(),
                    ));
                }
                if question.dimension != dimension {
                    return Err(ValidationError::duplicate(
                        "dimension tag",
                        format!("{} listed under {}", question.id, dimension),
                    ));
                }
                if question.options.is_empty() {
                    return Err(ValidationError::empty_field(format!(
                        "options for question '{}'",
                        question.id
                    )));
                }
                let ascending = question
                    .options
                    .windows(2)
                    .all(|pair| pair[0].value < pair[1].value);
                if !ascending {
                    return Err(ValidationError::duplicate(
                        "option value",
                        format!("options for question '{}' are not ascending", question.id),
                    ));
                }
                if dimension == RiskDimension::Bias && question.bias_kind.is_none() {
                    return Err(ValidationError::empty_field(format!(
                        "bias kind for question '{}'",
                        question.id
                    )));
                }
            }
        }

        Ok(())
    }
}
