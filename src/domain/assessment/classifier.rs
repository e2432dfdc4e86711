//! Profile classifier - combines capacity and willingness into the
//! final score and risk category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CategoryScore;

/// How far willingness may pull the final score above capacity.
///
/// Appetite for risk never drives the recommendation more than this far
/// beyond what the investor's financial situation can sustain. A policy
/// constant, revisited by product rather than by code.
pub const CAPACITY_SLACK: f64 = 0.5;

/// Lower bound of the scoring scale.
pub const SCALE_MIN: f64 = 1.0;

/// Upper bound of the scoring scale.
pub const SCALE_MAX: f64 = 5.0;

/// Band floors: scores at or above a floor fall into that band.
/// Five equal 0.8-wide bands over [1.0, 5.0].
pub const MODERATE_CONSERVATIVE_FLOOR: f64 = 1.8;
pub const MODERATE_FLOOR: f64 = 2.6;
pub const MODERATE_AGGRESSIVE_FLOOR: f64 = 3.4;
pub const AGGRESSIVE_FLOOR: f64 = 4.2;

/// The five risk categories, ordered by risk appetite.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Conservative,
    ModerateConservative,
    Moderate,
    ModerateAggressive,
    Aggressive,
}

impl RiskCategory {
    /// All categories in ascending risk order.
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::Conservative,
        RiskCategory::ModerateConservative,
        RiskCategory::Moderate,
        RiskCategory::ModerateAggressive,
        RiskCategory::Aggressive,
    ];

    /// Maps a final score in [1.0, 5.0] to its band.
    ///
    /// Floors are inclusive: exactly 4.2 classifies as Aggressive.
    pub fn from_score(score: f64) -> Self {
        if score >= AGGRESSIVE_FLOOR {
            RiskCategory::Aggressive
        } else if score >= MODERATE_AGGRESSIVE_FLOOR {
            RiskCategory::ModerateAggressive
        } else if score >= MODERATE_FLOOR {
            RiskCategory::Moderate
        } else if score >= MODERATE_CONSERVATIVE_FLOOR {
            RiskCategory::ModerateConservative
        } else {
            RiskCategory::Conservative
        }
    }

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Conservative => "Conservative",
            RiskCategory::ModerateConservative => "Moderate-Conservative",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::ModerateAggressive => "Moderate-Aggressive",
            RiskCategory::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of combining the capacity and willingness scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub final_score: f64,
    pub category: RiskCategory,
}

/// Combines capacity and willingness under the conservative-ceiling rule.
///
/// `final = min(willingness, capacity + CAPACITY_SLACK)`: willingness
/// marginally ahead of capacity passes through, a large gap is capped.
/// The behavioral-bias score never enters this combination; bias is
/// advisory and feeds the narrative only.
///
/// Monotonic in both inputs: raising either score, holding the other
/// fixed, never lowers the final score or the category.
pub fn classify(capacity: &CategoryScore, willingness: &CategoryScore) -> Classification {
    let ceiling = capacity.normalized + CAPACITY_SLACK;
    let final_score = willingness.normalized.min(ceiling);

    Classification {
        final_score,
        category: RiskCategory::from_score(final_score),
    }
}
