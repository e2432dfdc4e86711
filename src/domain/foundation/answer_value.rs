//! Answer value object for the questionnaire's 1-5 scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A chosen answer on the discrete 1 (lowest) to 5 (highest) scale.
///
/// Higher values always point toward more risk capacity, more risk
/// willingness, or a stronger behavioral tendency, depending on which
/// question set the answer belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum AnswerValue {
    VeryLow = 1,
    Low = 2,
    Moderate = 3,
    High = 4,
    VeryHigh = 5,
}

impl AnswerValue {
    /// The five scale values in ascending order.
    pub const ALL: [AnswerValue; 5] = [
        AnswerValue::VeryLow,
        AnswerValue::Low,
        AnswerValue::Moderate,
        AnswerValue::High,
        AnswerValue::VeryHigh,
    ];

    /// Creates an AnswerValue from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(AnswerValue::VeryLow),
            2 => Ok(AnswerValue::Low),
            3 => Ok(AnswerValue::Moderate),
            4 => Ok(AnswerValue::High),
            5 => Ok(AnswerValue::VeryHigh),
            _ => Err(ValidationError::out_of_range(
                "answer value",
                1,
                5,
                value as i32,
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the next value up the scale, saturating at the top.
    pub fn bumped(&self) -> Self {
        match self {
            AnswerValue::VeryLow => AnswerValue::Low,
            AnswerValue::Low => AnswerValue::Moderate,
            AnswerValue::Moderate => AnswerValue::High,
            AnswerValue::High | AnswerValue::VeryHigh => AnswerValue::VeryHigh,
        }
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.value()
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
