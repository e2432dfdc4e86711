//! Narrative generator - human-readable characteristics and product tags.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::catalog::{AnswerSet, Question};
use crate::domain::foundation::AnswerValue;

use super::{CategoryScore, RiskCategory};

/// Gap between capacity and willingness (on the 1-5 scale) above which
/// the mismatch is flagged to the investor.
pub const CAPACITY_WILLINGNESS_GAP: f64 = 1.0;

/// Answers at or above this value mark a behavioral tendency as
/// pronounced enough to warrant an advisory sentence.
pub const PRONOUNCED_BIAS_THRESHOLD: AnswerValue = AnswerValue::High;

/// Narrative output: ordered, deterministic, rendered verbatim downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub characteristics: Vec<String>,
    pub recommended_products: Vec<String>,
}

/// Derives the narrative for a classified profile.
///
/// Characteristics, in order: the fixed per-category sentence; a
/// capacity/willingness gap sentence when the two normalized scores
/// differ by more than [`CAPACITY_WILLINGNESS_GAP`]; then one advisory
/// per pronounced bias answer, deduplicated by bias kind and emitted in
/// catalog order. Product tags depend on the category alone.
///
/// Bias questions without a recorded answer contribute nothing; the
/// assembler has already rejected incomplete answer sets by the time
/// this runs.
pub fn narrate(
    category: RiskCategory,
    capacity: &CategoryScore,
    willingness: &CategoryScore,
    bias_questions: &[Question],
    answers: &AnswerSet,
) -> Narrative {
    let mut characteristics = vec![category_characteristic(category).to_string()];

    let gap = capacity.normalized - willingness.normalized;
    if gap > CAPACITY_WILLINGNESS_GAP {
        characteristics.push(
            "Your financial capacity to take risk is well ahead of your stated comfort \
             with volatility; the recommendation follows your comfort level, and can be \
             revisited as your confidence grows."
                .to_string(),
        );
    } else if -gap > CAPACITY_WILLINGNESS_GAP {
        characteristics.push(
            "Your appetite for risk runs well ahead of what your financial situation can \
             currently absorb; the recommendation is capped by capacity rather than \
             appetite."
                .to_string(),
        );
    }

    let mut flagged = HashSet::new();
    for question in bias_questions {
        let Some(kind) = question.bias_kind else {
            continue;
        };
        let Some(answer) = answers.get(&question.id) else {
            continue;
        };
        if answer >= PRONOUNCED_BIAS_THRESHOLD && flagged.insert(kind) {
            characteristics.push(kind.advisory().to_string());
        }
    }

    Narrative {
        characteristics,
        recommended_products: recommended_products(category)
            .iter()
            .map(|p| p.to_string())
            .collect(),
    }
}

/// The fixed time-horizon and volatility-tolerance sentence per category.
fn category_characteristic(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Conservative => {
            "You prioritize preserving capital over growing it: a short time horizon and \
             little tolerance for fluctuation call for stable, income-oriented holdings."
        }
        RiskCategory::ModerateConservative => {
            "You accept small fluctuations in exchange for returns modestly above \
             inflation, keeping the bulk of the portfolio in defensive assets over a \
             medium horizon."
        }
        RiskCategory::Moderate => {
            "You balance growth and stability over a horizon of five or more years, and \
             can tolerate intermediate swings in portfolio value along the way."
        }
        RiskCategory::ModerateAggressive => {
            "You pursue long-term growth and accept sizable interim drawdowns, keeping \
             only a defensive sleeve to dampen the swings."
        }
        RiskCategory::Aggressive => {
            "You invest for maximum long-term growth over a decade or more and accept \
             that deep, extended drawdowns are part of the journey."
        }
    }
}

/// Product tags per category, independent of bias.
fn recommended_products(category: RiskCategory) -> &'static [&'static str] {
    match category {
        RiskCategory::Conservative => &[
            "Money-market funds",
            "Short-duration bond funds",
            "Capital-protected deposits",
        ],
        RiskCategory::ModerateConservative => &[
            "Investment-grade bond funds",
            "Balanced income funds",
            "Dividend equity funds",
        ],
        RiskCategory::Moderate => &[
            "Broad-market index funds",
            "Balanced funds",
            "Intermediate bond funds",
        ],
        RiskCategory::ModerateAggressive => &[
            "Growth equity funds",
            "International equity funds",
            "Listed real estate funds",
        ],
        RiskCategory::Aggressive => &[
            "Growth equity funds",
            "Sector ETFs",
            "Small-cap funds",
            "Emerging-market funds",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{AnswerOption, BiasKind};
    use crate::domain::foundation::{QuestionId, RiskDimension};

    fn scale() -> Vec<AnswerOption> {
        AnswerValue::ALL
            .iter()
            .map(|v| AnswerOption::new(*v, format!("level {}", v)))
            .collect()
    }

    fn bias_question(id: &str, kind: BiasKind) -> Question {
        Question::new(id, RiskDimension::Bias, scale()).with_bias(kind)
    }

    fn score(normalized: f64) -> CategoryScore {
        CategoryScore::new(normalized, 5.0)
    }

    #[test]
    fn always_leads_with_the_category_sentence() {
        let narrative = narrate(
            RiskCategory::Moderate,
            &score(3.0),
            &score(3.0),
            &[],
            &AnswerSet::new(),
        );
        assert_eq!(narrative.characteristics.len(), 1);
        assert!(narrative.characteristics[0].contains("balance growth and stability"));
    }

    #[test]
    fn flags_willingness_running_ahead_of_capacity() {
        let narrative = narrate(
            RiskCategory::Conservative,
            &score(1.0),
            &score(5.0),
            &[],
            &AnswerSet::new(),
        );
        assert_eq!(narrative.characteristics.len(), 2);
        assert!(narrative.characteristics[1].contains("capped by capacity"));
    }

    #[test]
    fn flags_capacity_running_ahead_of_willingness() {
        let narrative = narrate(
            RiskCategory::ModerateConservative,
            &score(4.5),
            &score(2.0),
            &[],
            &AnswerSet::new(),
        );
        assert_eq!(narrative.characteristics.len(), 2);
        assert!(narrative.characteristics[1].contains("follows your comfort level"));
    }

    #[test]
    fn gap_of_exactly_one_is_not_flagged() {
        let narrative = narrate(
            RiskCategory::Moderate,
            &score(4.0),
            &score(3.0),
            &[],
            &AnswerSet::new(),
        );
        assert_eq!(narrative.characteristics.len(), 1);
    }

    #[test]
    fn pronounced_bias_answers_produce_advisories_in_catalog_order() {
        let questions = vec![
            bias_question("bias_recency", BiasKind::RecencyBias),
            bias_question("bias_loss_aversion", BiasKind::LossAversion),
            bias_question("bias_herding", BiasKind::HerdMentality),
        ];
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new("bias_recency"), AnswerValue::High);
        answers.record(QuestionId::new("bias_loss_aversion"), AnswerValue::VeryHigh);
        answers.record(QuestionId::new("bias_herding"), AnswerValue::Moderate);

        let narrative = narrate(
            RiskCategory::Moderate,
            &score(3.0),
            &score(3.0),
            &questions,
            &answers,
        );

        assert_eq!(narrative.characteristics.len(), 3);
        assert!(narrative.characteristics[1].contains("recency bias"));
        assert!(narrative.characteristics[2].contains("loss aversion"));
    }

    #[test]
    fn moderate_bias_answers_are_not_flagged() {
        let questions = vec![bias_question("bias_anchoring", BiasKind::Anchoring)];
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new("bias_anchoring"), AnswerValue::Moderate);

        let narrative = narrate(
            RiskCategory::Moderate,
            &score(3.0),
            &score(3.0),
            &questions,
            &answers,
        );
        assert_eq!(narrative.characteristics.len(), 1);
    }

    #[test]
    fn repeated_bias_kinds_are_deduplicated() {
        let questions = vec![
            bias_question("bias_recency_a", BiasKind::RecencyBias),
            bias_question("bias_recency_b", BiasKind::RecencyBias),
        ];
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new("bias_recency_a"), AnswerValue::VeryHigh);
        answers.record(QuestionId::new("bias_recency_b"), AnswerValue::VeryHigh);

        let narrative = narrate(
            RiskCategory::Moderate,
            &score(3.0),
            &score(3.0),
            &questions,
            &answers,
        );
        assert_eq!(narrative.characteristics.len(), 2);
    }

    #[test]
    fn products_depend_on_category_alone() {
        let narrative = narrate(
            RiskCategory::Aggressive,
            &score(5.0),
            &score(5.0),
            &[],
            &AnswerSet::new(),
        );
        assert_eq!(
            narrative.recommended_products,
            vec![
                "Growth equity funds",
                "Sector ETFs",
                "Small-cap funds",
                "Emerging-market funds"
            ]
        );
    }

    #[test]
    fn every_category_has_a_sentence_and_products() {
        for category in RiskCategory::ALL {
            assert!(!category_characteristic(category).is_empty());
            assert!(!recommended_products(category).is_empty());
        }
    }

    #[test]
    fn identical_inputs_yield_identical_narratives() {
        let questions = vec![bias_question("bias_home_market", BiasKind::HomeBias)];
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new("bias_home_market"), AnswerValue::High);

        let a = narrate(
            RiskCategory::ModerateAggressive,
            &score(4.0),
            &score(3.5),
            &questions,
            &answers,
        );
        let b = narrate(
            RiskCategory::ModerateAggressive,
            &score(4.0),
            &score(3.5),
            &questions,
            &answers,
        );
        assert_eq!(a, b);
    }
}
