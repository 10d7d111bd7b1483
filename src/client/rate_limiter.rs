//! Rate limiting for score API requests.
//!
//! Token bucket limiter that caps how fast lookups hit the remote service,
//! which matters when a batch of URLs is resolved at once.

use governor::{Quota, RateLimiter as GovLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

type DirectLimiter = GovLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// A shared requests-per-second limiter.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DirectLimiter>,
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}

impl RateLimiter {
    /// Create a limiter allowing `rate` requests per second.
    ///
    /// Returns `None` for a rate of 0, meaning unlimited.
    pub fn new(rate: u32) -> Option<Self> {
        let rate = NonZeroU32::new(rate)?;
        let limiter = GovLimiter::direct(Quota::per_second(rate));

        Some(Self {
            limiter: Arc::new(limiter),
        })
    }

    /// Wait until a request may be sent.
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_zero_rate_is_unlimited() {
        assert!(RateLimiter::new(0).is_none());
    }

    #[tokio::test]
    async fn test_rate_limiter_wait() {
        let limiter = RateLimiter::new(1000).unwrap();
        limiter.wait().await;
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let limiter = RateLimiter::new(1).unwrap();
        let clone = limiter.clone();
        limiter.wait().await;

        let blocked = tokio::time::timeout(Duration::from_millis(100), clone.wait()).await;
        assert!(blocked.is_err());
    }
}
