//! The three scored dimensions of an investor risk assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which question set a question, answer, or score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDimension {
    /// Objective ability to absorb loss (horizon, reserves, income stability).
    Capacity,
    /// Subjective comfort with investment volatility.
    Willingness,
    /// Behavioral tendencies that degrade decision quality.
    Bias,
}

impl RiskDimension {
    /// Returns the display label for this dimension.
    pub fn label(&self) -> &'static str {
        match self {
            RiskDimension::Capacity => "capacity",
            RiskDimension::Willingness => "willingness",
            RiskDimension::Bias => "behavioral-bias",
        }
    }
}

impl fmt::Display for RiskDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
