//! Score value object for FMEA axes (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A single FMEA axis value between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Score(u8);

impl Score {
    /// Lowest value on the scale.
    pub const MIN: i32 = 1;

    /// Highest value on the scale.
    pub const MAX: i32 = 10;

    /// Creates a Score, bounding the value into [1, 10].
    pub fn clamped(value: i32) -> Self {
        // Bounded to 1..=10, so the cast cannot truncate.
        Self(value.clamp(Self::MIN, Self::MAX) as u8)
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value widened for accumulation.
    pub fn as_i32(&self) -> i32 {
        i32::from(self.0)
    }
}

impl TryFrom<i32> for Score {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        score.as_i32()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
