//! Importance weight value object for catalog questions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance multiplier applied to a question's answer during scoring.
///
/// Defaults to 1. Weights let specific questions dominate a category
/// score without distorting its 1-5 scale. Zero is representable so
/// that a degenerate catalog can be constructed and rejected by the
/// scorer rather than masked at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u32);

impl Weight {
    /// The default weight carried by most questions.
    pub const DEFAULT: Self = Self(1);

    /// Creates a new weight.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric multiplier.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns true if this weight contributes nothing to a score.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weight_is_one() {
        assert_eq!(Weight::default().value(), 1);
        assert_eq!(Weight::DEFAULT, Weight::new(1));
    }

    #[test]
    fn zero_weight_is_detectable() {
        assert!(Weight::new(0).is_zero());
        assert!(!Weight::new(2).is_zero());
    }

    #[test]
    fn serializes_transparently() {
        assert_eq!(serde_json::to_string(&Weight::new(2)).unwrap(), "2");
        let weight: Weight = serde_json::from_str("3").unwrap();
        assert_eq!(weight.value(), 3);
    }
}
