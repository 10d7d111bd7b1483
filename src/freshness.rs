//! Freshness policy for cached score records.
//!
//! Scored records and "no score yet" records age out on separate windows so
//! that an unreviewed domain is asked about again sooner than an established
//! score is refreshed.

use crate::types::ScoreRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds in one expiry day. Expiry is plain epoch arithmetic.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Default staleness window for records with a score.
pub const DEFAULT_LAST_SCORE_EXPIRATION_DAYS: u32 = 30;

/// Default staleness window for records without a score.
pub const DEFAULT_NO_SCORE_EXPIRATION_DAYS: u32 = 1;

/// What to do with a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Serve the stored record without a network call.
    UseCached,
    /// Ask the scoring API again.
    Refetch,
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UseCached => write!(f, "use-cached"),
            Self::Refetch => write!(f, "refetch"),
        }
    }
}

/// Expiry windows for cached records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessPolicy {
    /// Days a record with a score stays usable.
    pub last_score_expiration_days: u32,
    /// Days a record without a score stays usable.
    pub no_score_expiration_days: u32,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            last_score_expiration_days: DEFAULT_LAST_SCORE_EXPIRATION_DAYS,
            no_score_expiration_days: DEFAULT_NO_SCORE_EXPIRATION_DAYS,
        }
    }
}

impl FreshnessPolicy {
    pub fn new(last_score_expiration_days: u32, no_score_expiration_days: u32) -> Self {
        Self {
            last_score_expiration_days,
            no_score_expiration_days,
        }
    }

    /// Classify a stored record (or its absence) at time `now`.
    pub fn classify(&self, record: Option<&ScoreRecord>, now: i64) -> Freshness {
        match record {
            None => Freshness::Refetch,
            Some(record) if self.is_expired(record, now) => Freshness::Refetch,
            Some(_) => Freshness::UseCached,
        }
    }

    /// Length of the window that applies to `record`, in milliseconds.
    pub fn window_millis(&self, record: &ScoreRecord) -> i64 {
        let days = if record.has_score() {
            self.last_score_expiration_days
        } else {
            self.no_score_expiration_days
        };
        i64::from(days).saturating_mul(MILLIS_PER_DAY)
    }

    /// Time at which `record` stops being usable.
    pub fn expires_at(&self, record: &ScoreRecord) -> i64 {
        record.score_date.saturating_add(self.window_millis(record))
    }

    /// A record is expired once its full window has elapsed.
    pub fn is_expired(&self, record: &ScoreRecord, now: i64) -> bool {
        now.saturating_sub(record.score_date) >= self.window_millis(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Score;

    const T0: i64 = 1_700_000_000_000;

    fn scored(date: i64) -> ScoreRecord {
        ScoreRecord::scored(Score::new(700).unwrap(), None, date)
    }

    #[test]
    fn test_missing_record_refetches() {
        let policy = FreshnessPolicy::default();
        assert_eq!(policy.classify(None, T0), Freshness::Refetch);
        assert_eq!(policy.classify(None, 0), Freshness::Refetch);
    }

    #[test]
    fn test_scored_window() {
        let policy = FreshnessPolicy::default();
        let record = scored(T0);
        let window = 30 * MILLIS_PER_DAY;

        assert_eq!(policy.classify(Some(&record), T0), Freshness::UseCached);
        assert_eq!(policy.classify(Some(&record), T0 + window - 1), Freshness::UseCached);
        assert_eq!(policy.classify(Some(&record), T0 + window), Freshness::Refetch);
        assert_eq!(policy.classify(Some(&record), T0 + window + 1), Freshness::Refetch);
    }

    #[test]
    fn test_no_score_window() {
        let policy = FreshnessPolicy::default();
        let record = ScoreRecord::not_found(T0);

        assert_eq!(
            policy.classify(Some(&record), T0 + MILLIS_PER_DAY - 1),
            Freshness::UseCached
        );
        assert_eq!(
            policy.classify(Some(&record), T0 + MILLIS_PER_DAY),
            Freshness::Refetch
        );
    }

    #[test]
    fn test_windows_are_independent() {
        let policy = FreshnessPolicy::default();
        let two_days_later = T0 + 2 * MILLIS_PER_DAY;

        assert_eq!(policy.classify(Some(&scored(T0)), two_days_later), Freshness::UseCached);
        assert_eq!(
            policy.classify(Some(&ScoreRecord::not_found(T0)), two_days_later),
            Freshness::Refetch
        );
    }

    #[test]
    fn test_every_case_classifies() {
        // Every combination of presence, score, and age maps to one of the
        // two actions; there is no fallback state.
        let policy = FreshnessPolicy::new(30, 1);
        let ages = [0, MILLIS_PER_DAY, 29 * MILLIS_PER_DAY, 30 * MILLIS_PER_DAY, 365 * MILLIS_PER_DAY];

        for age in ages {
            let now = T0 + age;
            for record in [None, Some(scored(T0)), Some(ScoreRecord::not_found(T0))] {
                let expected = match &record {
                    None => Freshness::Refetch,
                    Some(r) if r.has_score() && age < 30 * MILLIS_PER_DAY => Freshness::UseCached,
                    Some(r) if !r.has_score() && age < MILLIS_PER_DAY => Freshness::UseCached,
                    Some(_) => Freshness::Refetch,
                };
                assert_eq!(policy.classify(record.as_ref(), now), expected, "age {}", age);
            }
        }
    }

    #[test]
    fn test_zero_window_always_refetches() {
        let policy = FreshnessPolicy::new(0, 0);
        assert_eq!(policy.classify(Some(&scored(T0)), T0), Freshness::Refetch);
    }

    #[test]
    fn test_future_dated_record_is_fresh() {
        let policy = FreshnessPolicy::default();
        assert_eq!(policy.classify(Some(&scored(T0 + 1_000)), T0), Freshness::UseCached);
    }

    #[test]
    fn test_expires_at_saturates() {
        let policy = FreshnessPolicy::new(u32::MAX, 1);
        assert_eq!(policy.expires_at(&scored(i64::MAX - 1)), i64::MAX);
        assert_eq!(policy.expires_at(&ScoreRecord::not_found(T0)), T0 + MILLIS_PER_DAY);
    }
}
