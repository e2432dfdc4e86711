//! Question and answer-option types for the assessment catalog.
//!
//! Only scoring-relevant fields live here. Presentation metadata
//! (icons, "why this matters" copy, pagination hints) belongs to the
//! questionnaire UI and never enters the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AnswerValue, QuestionId, RiskDimension, Weight};

/// Behavioral-bias category attached to questions in the bias set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasKind {
    LossAversion,
    Overconfidence,
    RecencyBias,
    HerdMentality,
    Anchoring,
    HomeBias,
    MentalAccounting,
    DispositionEffect,
    FamiliarityBias,
    StatusQuoBias,
}

impl BiasKind {
    /// Returns the display label for this bias.
    pub fn label(&self) -> &'static str {
        match self {
            BiasKind::LossAversion => "loss aversion",
            BiasKind::Overconfidence => "overconfidence",
            BiasKind::RecencyBias => "recency bias",
            BiasKind::HerdMentality => "herd mentality",
            BiasKind::Anchoring => "anchoring",
            BiasKind::HomeBias => "home bias",
            BiasKind::MentalAccounting => "mental accounting",
            BiasKind::DispositionEffect => "disposition effect",
            BiasKind::FamiliarityBias => "familiarity bias",
            BiasKind::StatusQuoBias => "status quo bias",
        }
    }

    /// Returns the advisory sentence shown when this tendency is pronounced.
    pub fn advisory(&self) -> &'static str {
        match self {
            BiasKind::LossAversion => {
                "Your answers indicate pronounced loss aversion; losses may loom larger for you than equivalent gains, so agree on an exit plan before investing rather than during a downturn."
            }
            BiasKind::Overconfidence => {
                "Your answers indicate a tendency toward overconfidence; consider tracking past forecasts against outcomes before sizing positions on conviction alone."
            }
            BiasKind::RecencyBias => {
                "Your answers indicate recency bias; recent market moves may weigh too heavily in your outlook, so anchor decisions to long-run data rather than the latest quarter."
            }
            BiasKind::HerdMentality => {
                "Your answers indicate a herd-following tendency; popularity of an investment is not evidence of its quality, so review your own criteria before joining a crowded trade."
            }
            BiasKind::Anchoring => {
                "Your answers indicate anchoring on purchase prices or past values; an asset's prospects do not depend on what you paid for it."
            }
            BiasKind::HomeBias => {
                "Your answers indicate a strong home-market preference; consider whether your geographic concentration is a deliberate choice or a familiarity default."
            }
            BiasKind::MentalAccounting => {
                "Your answers indicate mental accounting; money in separate buckets still belongs to one portfolio, and risk should be judged across the whole of it."
            }
            BiasKind::DispositionEffect => {
                "Your answers indicate a disposition to sell winners early and hold losers; predefined rebalancing rules can keep this tendency out of individual sell decisions."
            }
            BiasKind::FamiliarityBias => {
                "Your answers indicate familiarity bias; knowing a company well is not the same as its stock being fairly priced."
            }
            BiasKind::StatusQuoBias => {
                "Your answers indicate status quo bias; revisit your allocation on a schedule so inertia does not make the decision for you."
            }
        }
    }
}

impl fmt::Display for BiasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One selectable option on a question's 1-5 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: AnswerValue,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AnswerOption {
    /// Creates an option with a label.
    pub fn new(value: AnswerValue, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            description: None,
        }
    }

    /// Creates an option with a label and a longer description.
    pub fn with_description(
        value: AnswerValue,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value,
            label: label.into(),
            description: Some(description.into()),
        }
    }
}

/// A single catalog question: id, dimension, importance weight, and the
/// ordered options an investor may choose from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub dimension: RiskDimension,
    #[serde(default)]
    pub weight: Weight,
    pub options: Vec<AnswerOption>,
    /// Present on every question in the bias set, absent elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_kind: Option<BiasKind>,
}

impl Question {
    /// Creates a question with the default weight of 1.
    pub fn new(
        id: impl Into<QuestionId>,
        dimension: RiskDimension,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: id.into(),
            dimension,
            weight: Weight::DEFAULT,
            options,
            bias_kind: None,
        }
    }

    /// Sets a non-default importance weight.
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Tags the question with a behavioral-bias category.
    pub fn with_bias(mut self, kind: BiasKind) -> Self {
        self.bias_kind = Some(kind);
        self
    }
}
