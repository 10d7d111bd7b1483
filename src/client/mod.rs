//! Remote scoring API access.
//!
//! `ScoreFetcher` is the seam the cache talks through; `ScoreClient` is the
//! HTTP implementation against the scoring service.

mod http;
mod rate_limiter;

pub use http::{ClientConfig, ScoreClient, DEFAULT_BASE_URL};
pub use rate_limiter::RateLimiter;

use crate::error::ScoreResult;
use crate::types::Score;
use async_trait::async_trait;

/// What the scoring service said about a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchedScore {
    /// The domain has been reviewed.
    Found {
        score: Score,
        /// The service's own notion of the prior score. The cache tracks
        /// history locally and does not persist this.
        previous_score: Option<Score>,
    },
    /// No review exists for the domain (404 or empty payload).
    NotFound,
}

/// Trait for remote score sources.
#[async_trait]
pub trait ScoreFetcher: Send + Sync {
    /// Look up the current score for `domain`.
    async fn fetch_score(&self, domain: &str) -> ScoreResult<FetchedScore>;

    /// Queue `domain` for manual review.
    async fn request_review(&self, domain: &str) -> ScoreResult<()>;
}
