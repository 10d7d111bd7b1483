//! The score cache: store lookup, freshness check, remote refresh.
//!
//! A lookup reads the stored record, classifies it with the freshness
//! policy, and either serves it or fetches a new score and persists the
//! result. Lookups for the same domain are serialized so concurrent callers
//! trigger at most one fetch; different domains never wait on each other.

use crate::client::{FetchedScore, ScoreFetcher};
use crate::clock::{Clock, SystemClock};
use crate::domain::DomainExtractor;
use crate::error::{ScoreError, ScoreResult};
use crate::freshness::{Freshness, FreshnessPolicy};
use crate::storage::ScoreStore;
use crate::types::ScoreRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};
use tracing::{debug, info};

/// Result of a score lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Served from storage without a network call. May carry a null score.
    Cached(ScoreRecord),
    /// A new score was fetched and persisted.
    Fetched(ScoreRecord),
    /// The service had no score; a null-score record was persisted.
    NotFoundPersisted(ScoreRecord),
}

impl Outcome {
    /// The record this outcome carries.
    pub fn record(&self) -> &ScoreRecord {
        match self {
            Self::Cached(record) | Self::Fetched(record) | Self::NotFoundPersisted(record) => {
                record
            }
        }
    }

    /// Whether the remote service was contacted.
    pub fn was_fetched(&self) -> bool {
        !matches!(self, Self::Cached(_))
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cached(_) => "cached",
            Self::Fetched(_) => "fetched",
            Self::NotFoundPersisted(_) => "not-found",
        }
    }
}

/// Per-domain async locks. Entries are dropped once no lookup holds them.
#[derive(Default)]
struct KeyLocks {
    locks: Mutex<HashMap<String, Weak<tokio::sync::Mutex<()>>>>,
}

impl KeyLocks {
    fn lock_for(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(existing) = locks.get(key).and_then(Weak::upgrade) {
            return existing;
        }

        locks.retain(|_, lock| lock.strong_count() > 0);
        let lock = Arc::new(tokio::sync::Mutex::new(()));
        locks.insert(key.to_string(), Arc::downgrade(&lock));
        lock
    }
}

/// Local score cache in front of a remote scoring service.
pub struct ScoreCache {
    store: Arc<dyn ScoreStore>,
    fetcher: Arc<dyn ScoreFetcher>,
    policy: FreshnessPolicy,
    extractor: DomainExtractor,
    clock: Arc<dyn Clock>,
    locks: KeyLocks,
}

impl ScoreCache {
    /// Create a cache using the system clock and built-in suffix list.
    pub fn new(
        store: Arc<dyn ScoreStore>,
        fetcher: Arc<dyn ScoreFetcher>,
        policy: FreshnessPolicy,
    ) -> Self {
        Self {
            store,
            fetcher,
            policy,
            extractor: DomainExtractor::default(),
            clock: Arc::new(SystemClock),
            locks: KeyLocks::default(),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the domain extractor.
    pub fn with_extractor(mut self, extractor: DomainExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn policy(&self) -> &FreshnessPolicy {
        &self.policy
    }

    pub fn extractor(&self) -> &DomainExtractor {
        &self.extractor
    }

    /// Current time according to the cache's clock.
    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Look up the score for `domain`, refreshing it if stale.
    ///
    /// Remote and store failures are returned as-is and leave the stored
    /// record untouched.
    pub async fn lookup(&self, domain: &str) -> ScoreResult<Outcome> {
        let lock = self.locks.lock_for(domain);
        let _guard = lock.lock().await;

        let existing = self.store.get(domain).await?;
        let now = self.clock.now_millis();
        let decision = self.policy.classify(existing.as_ref(), now);
        debug!(domain = %domain, decision = %decision, has_record = existing.is_some(), "freshness check");

        match (decision, existing) {
            (Freshness::UseCached, Some(record)) => Ok(Outcome::Cached(record)),
            (_, existing) => self.refresh(domain, existing).await,
        }
    }

    /// Fetch a new score for `domain` and persist it.
    async fn refresh(&self, domain: &str, existing: Option<ScoreRecord>) -> ScoreResult<Outcome> {
        let fetched = self.fetcher.fetch_score(domain).await?;
        let now = self.clock.now_millis();

        let outcome = match fetched {
            FetchedScore::Found { score, .. } => {
                let previous_score = existing.and_then(|r| r.score);
                Outcome::Fetched(ScoreRecord::scored(score, previous_score, now))
            }
            FetchedScore::NotFound => Outcome::NotFoundPersisted(ScoreRecord::not_found(now)),
        };

        self.store.set(domain, outcome.record()).await?;
        info!(
            domain = %domain,
            outcome = outcome.label(),
            score = ?outcome.record().score.map(|s| s.as_u16()),
            "score refreshed"
        );

        Ok(outcome)
    }

    /// Look up the score for the domain of a page URL.
    ///
    /// Returns `Ok(None)` when no domain can be extracted from `url`.
    pub async fn lookup_url(&self, url: &str) -> ScoreResult<Option<(String, Outcome)>> {
        let Some(domain) = self.domain_of(url) else {
            return Ok(None);
        };

        let outcome = self.lookup(&domain).await?;
        Ok(Some((domain, outcome)))
    }

    /// Ask the service to review the domain of a page URL.
    ///
    /// Returns the domain submitted, or `Ok(None)` when no domain can be
    /// extracted from `url`.
    pub async fn request_review(&self, url: &str) -> ScoreResult<Option<String>> {
        let Some(domain) = self.domain_of(url) else {
            return Ok(None);
        };

        self.fetcher.request_review(&domain).await?;
        Ok(Some(domain))
    }

    /// Read the stored record for `domain` without applying any policy.
    pub async fn peek(&self, domain: &str) -> ScoreResult<Option<ScoreRecord>> {
        Ok(self.store.get(domain).await?)
    }

    fn domain_of(&self, url: &str) -> Option<String> {
        match self.extractor.extract(url) {
            Ok(domain) => Some(domain),
            Err(ScoreError::UrlParse { url, reason }) => {
                debug!(url = %url, reason = %reason, "skipping lookup");
                None
            }
            Err(_) => None,
        }
    }
}
