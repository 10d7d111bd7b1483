//! The persisted per-domain score record.

use super::score::Score;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cached reputation data for one domain.
///
/// A record with no `score` still carries the time it was determined that no
/// score exists, which distinguishes "looked up, nothing found" from "never
/// looked up" (no record at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// Current score, or `None` if the domain has not been reviewed.
    #[serde(default)]
    pub score: Option<Score>,
    /// Score that this record superseded.
    #[serde(default)]
    pub previous_score: Option<Score>,
    /// When the record was written, in milliseconds since the Unix epoch.
    pub score_date: i64,
}

impl ScoreRecord {
    /// A record for a domain that has a score.
    pub fn scored(score: Score, previous_score: Option<Score>, score_date: i64) -> Self {
        Self {
            score: Some(score),
            previous_score,
            score_date,
        }
    }

    /// A record noting that no score was available at `score_date`.
    pub fn not_found(score_date: i64) -> Self {
        Self {
            score: None,
            previous_score: None,
            score_date,
        }
    }

    /// Whether this record carries a score.
    pub fn has_score(&self) -> bool {
        self.score.is_some()
    }

    /// Direction of change against the superseded score.
    pub fn trend(&self) -> Trend {
        Trend::between(self.score, self.previous_score)
    }

    /// `score_date` as a UTC timestamp, if representable.
    pub fn written_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.score_date).single()
    }
}

/// Direction a score moved since the previous lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Improving,
    GettingWorse,
    NoChange,
    NoHistory,
}

impl Trend {
    /// Compare a current score with the one it replaced.
    pub fn between(current: Option<Score>, previous: Option<Score>) -> Self {
        match (current, previous) {
            (Some(current), Some(previous)) if current > previous => Self::Improving,
            (Some(current), Some(previous)) if current < previous => Self::GettingWorse,
            (Some(_), Some(_)) => Self::NoChange,
            _ => Self::NoHistory,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Improving => write!(f, "Improving"),
            Self::GettingWorse => write!(f, "Getting Worse"),
            Self::NoChange => write!(f, "No change"),
            Self::NoHistory => write!(f, "No History"),
        }
    }
}
