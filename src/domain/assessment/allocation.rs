//! Allocation mapper - target asset mix per risk category.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percent;

use super::{AssessmentError, RiskCategory};

/// Target portfolio split across the four asset classes.
///
/// Invariant: the four percentages sum to exactly 100, checked once at
/// catalog load rather than on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub stocks: Percent,
    pub bonds: Percent,
    pub alternatives: Percent,
    pub cash: Percent,
}

impl AssetAllocation {
    /// Creates an allocation row.
    pub const fn new(stocks: u8, bonds: u8, alternatives: u8, cash: u8) -> Self {
        Self {
            stocks: Percent::new(stocks),
            bonds: Percent::new(bonds),
            alternatives: Percent::new(alternatives),
            cash: Percent::new(cash),
        }
    }

    /// Sum of the four percentages.
    pub fn total(&self) -> u32 {
        self.stocks.value() as u32
            + self.bonds.value() as u32
            + self.alternatives.value() as u32
            + self.cash.value() as u32
    }
}

impl fmt::Display for AssetAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stocks {} / bonds {} / alternatives {} / cash {}",
            self.stocks, self.bonds, self.alternatives, self.cash
        )
    }
}

// The table is policy, not arithmetic: rows may be revised without
// touching the scoring math.
const CONSERVATIVE: AssetAllocation = AssetAllocation::new(20, 60, 0, 20);
const MODERATE_CONSERVATIVE: AssetAllocation = AssetAllocation::new(40, 50, 0, 10);
const MODERATE: AssetAllocation = AssetAllocation::new(60, 35, 5, 0);
const MODERATE_AGGRESSIVE: AssetAllocation = AssetAllocation::new(75, 20, 5, 0);
const AGGRESSIVE: AssetAllocation = AssetAllocation::new(90, 5, 5, 0);

/// Returns the target allocation for a risk category.
pub fn allocation_for(category: RiskCategory) -> AssetAllocation {
    match category {
        RiskCategory::Conservative => CONSERVATIVE,
        RiskCategory::ModerateConservative => MODERATE_CONSERVATIVE,
        RiskCategory::Moderate => MODERATE,
        RiskCategory::ModerateAggressive => MODERATE_AGGRESSIVE,
        RiskCategory::Aggressive => AGGRESSIVE,
    }
}

/// Verifies every allocation row sums to 100.
///
/// Run at catalog load; a failure is a configuration defect and should
/// abort startup rather than surface per request.
pub fn validate_allocation_table() -> Result<(), AssessmentError> {
    for category in RiskCategory::ALL {
        let total = allocation_for(category).total();
        if total != 100 {
            return Err(AssessmentError::InvalidAllocationTable { category, total });
        }
    }
    Ok(())
}
