//! Profile assembler - the engine's sole entry point.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{AnswerSet, QuestionCatalog};
use crate::domain::foundation::RiskDimension;

use super::{
    allocation_for, classify, narrate, score_category, AssessmentError, AssetAllocation,
    CategoryScore, RiskCategory,
};

/// The complete, immutable outcome of one questionnaire submission.
///
/// A value type: never mutated, only replaced wholesale when the
/// investor retakes the assessment. Persistence (keyed by user and
/// catalog version) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfileResult {
    pub capacity_score: CategoryScore,
    pub willingness_score: CategoryScore,
    pub bias_score: CategoryScore,
    pub final_score: f64,
    pub category: RiskCategory,
    pub asset_allocation: AssetAllocation,
    pub characteristics: Vec<String>,
    pub recommended_products: Vec<String>,
}

/// Computes a risk profile from a catalog and a completed answer set.
///
/// Validates structure first (non-empty question sets, every question
/// answered) and fails before any scoring if either check fails. Then:
/// score each dimension, combine capacity and willingness under the
/// conservative ceiling, look up the target allocation, and derive the
/// narrative. Pure: identical inputs produce identical results.
pub fn compute_risk_profile(
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
) -> Result<RiskProfileResult, AssessmentError> {
    let dimensions = [
        RiskDimension::Capacity,
        RiskDimension::Willingness,
        RiskDimension::Bias,
    ];

    for dimension in dimensions {
        if catalog.questions(dimension).is_empty() {
            return Err(AssessmentError::EmptyCategory { dimension });
        }
    }
    for dimension in dimensions {
        for question in catalog.questions(dimension) {
            if answers.get(&question.id).is_none() {
                return Err(AssessmentError::missing_answer(question.id.clone()));
            }
        }
    }

    let capacity_score =
        score_category(RiskDimension::Capacity, &catalog.capacity, answers)?;
    let willingness_score =
        score_category(RiskDimension::Willingness, &catalog.willingness, answers)?;
    let bias_score = score_category(RiskDimension::Bias, &catalog.bias, answers)?;

    let classification = classify(&capacity_score, &willingness_score);
    let asset_allocation = allocation_for(classification.category);
    let narrative = narrate(
        classification.category,
        &capacity_score,
        &willingness_score,
        &catalog.bias,
        answers,
    );

    Ok(RiskProfileResult {
        capacity_score,
        willingness_score,
        bias_score,
        final_score: classification.final_score,
        category: classification.category,
        asset_allocation,
        characteristics: narrative.characteristics,
        recommended_products: narrative.recommended_products,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{default_catalog, AnswerOption, Question};
    use crate::domain::foundation::{AnswerValue, CatalogVersion, QuestionId};

    fn answer_catalog(catalog: &QuestionCatalog, value: AnswerValue) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for dimension in [
            RiskDimension::Capacity,
            RiskDimension::Willingness,
            RiskDimension::Bias,
        ] {
            for question in catalog.questions(dimension) {
                answers.record(question.id.clone(), value);
            }
        }
        answers
    }

    #[test]
    fn mid_scale_answers_produce_a_moderate_profile() {
        let catalog = default_catalog();
        let answers = answer_catalog(catalog, AnswerValue::Moderate);

        let result = compute_risk_profile(catalog, &answers).unwrap();
        assert_eq!(result.capacity_score.normalized, 3.0);
        assert_eq!(result.willingness_score.normalized, 3.0);
        assert_eq!(result.final_score, 3.0);
        assert_eq!(result.category, RiskCategory::Moderate);
        assert_eq!(result.asset_allocation.stocks.value(), 60);
    }

    #[test]
    fn empty_category_fails_before_scoring() {
        let catalog = default_catalog();
        let stripped = QuestionCatalog::new(
            CatalogVersion::new("test.1"),
            catalog.capacity.clone(),
            Vec::new(),
            catalog.bias.clone(),
        );
        let answers = answer_catalog(catalog, AnswerValue::Moderate);

        let err = compute_risk_profile(&stripped, &answers).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::EmptyCategory {
                dimension: RiskDimension::Willingness
            }
        );
    }

    #[test]
    fn missing_answer_fails_without_partial_result() {
        let catalog = default_catalog();
        let mut answers = answer_catalog(catalog, AnswerValue::High);
        let omitted = catalog.willingness[3].id.clone();
        answers.remove(&omitted);

        let err = compute_risk_profile(catalog, &answers).unwrap_err();
        assert_eq!(err, AssessmentError::missing_answer(omitted));
    }

    #[test]
    fn extra_answers_for_unknown_questions_are_ignored() {
        let catalog = default_catalog();
        let mut answers = answer_catalog(catalog, AnswerValue::Moderate);
        answers.record(QuestionId::new("not_in_catalog"), AnswerValue::VeryHigh);

        let result = compute_risk_profile(catalog, &answers).unwrap();
        assert_eq!(result.category, RiskCategory::Moderate);
    }

    #[test]
    fn bias_answers_never_move_the_final_score() {
        let catalog = default_catalog();
        let mut low_bias = answer_catalog(catalog, AnswerValue::Moderate);
        let mut high_bias = answer_catalog(catalog, AnswerValue::Moderate);
        for question in &catalog.bias {
            low_bias.record(question.id.clone(), AnswerValue::VeryLow);
            high_bias.record(question.id.clone(), AnswerValue::VeryHigh);
        }

        let low = compute_risk_profile(catalog, &low_bias).unwrap();
        let high = compute_risk_profile(catalog, &high_bias).unwrap();

        assert_eq!(low.final_score, high.final_score);
        assert_eq!(low.category, high.category);
        assert_ne!(low.bias_score.normalized, high.bias_score.normalized);
        // The pronounced answers surface as advisories instead.
        assert!(high.characteristics.len() > low.characteristics.len());
    }

    #[test]
    fn result_serializes_and_round_trips() {
        let catalog = default_catalog();
        let answers = answer_catalog(catalog, AnswerValue::High);

        let result = compute_risk_profile(catalog, &answers).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: RiskProfileResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn degenerate_catalog_is_reported_for_the_right_dimension() {
        let catalog = default_catalog();
        let zeroed: Vec<Question> = catalog
            .bias
            .iter()
            .cloned()
            .map(|q| {
                Question::new(
                    q.id.as_str(),
                    RiskDimension::Bias,
                    q.options
                        .iter()
                        .map(|o| AnswerOption::new(o.value, o.label.clone()))
                        .collect(),
                )
                .with_weight(crate::domain::foundation::Weight::new(0))
                .with_bias(q.bias_kind.unwrap())
            })
            .collect();
        let degenerate = QuestionCatalog::new(
            CatalogVersion::new("test.1"),
            catalog.capacity.clone(),
            catalog.willingness.clone(),
            zeroed,
        );
        let answers = answer_catalog(catalog, AnswerValue::Moderate);

        let err = compute_risk_profile(&degenerate, &answers).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::DegenerateCatalog {
                dimension: RiskDimension::Bias
            }
        );
    }
}
