//! Score types with validation.
//!
//! The `Score` newtype ensures values always sit on the reputation scale
//! (300-850). `Rating` maps a score onto its named band.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated reputation score (300-850).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct Score(u16);

impl Score {
    /// Lowest score on the scale.
    pub const MIN: u16 = 300;
    /// Highest score on the scale.
    pub const MAX: u16 = 850;

    /// Create a new Score, returning None if out of range.
    #[inline]
    pub const fn new(score: u16) -> Option<Self> {
        if score >= Self::MIN && score <= Self::MAX {
            Some(Self(score))
        } else {
            None
        }
    }

    /// Get the raw score.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Position of this score on the scale as a percentage (0.0-100.0).
    pub fn percent(self) -> f64 {
        f64::from(self.0 - Self::MIN) / f64::from(Self::MAX - Self::MIN) * 100.0
    }

    /// The named band this score falls into.
    pub fn rating(self) -> Rating {
        match self.0 {
            0..=579 => Rating::VeryPoor,
            580..=669 => Rating::Fair,
            670..=739 => Rating::Good,
            740..=799 => Rating::VeryGood,
            _ => Rating::Exceptional,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(ScoreValueError::OutOfRange(value))
    }
}

impl From<Score> for u16 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Error type for score validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreValueError {
    #[error("score {0} is out of valid range (300-850)")]
    OutOfRange(i64),
}

/// Named band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    /// Below 580.
    VeryPoor,
    /// 580-669.
    Fair,
    /// 670-739.
    Good,
    /// 740-799.
    VeryGood,
    /// 800 and above.
    Exceptional,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VeryPoor => write!(f, "Very Poor"),
            Self::Fair => write!(f, "Fair"),
            Self::Good => write!(f, "Good"),
            Self::VeryGood => write!(f, "Very Good"),
            Self::Exceptional => write!(f, "Exceptional"),
        }
    }
}
