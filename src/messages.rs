//! Request/response messages between a presentation layer and the cache.
//!
//! The shapes match what a page overlay sends and expects, so any transport
//! (stdio, a socket, an extension host) can carry them as JSON.

use crate::cache::{Outcome, ScoreCache};
use crate::error::ScoreResult;
use crate::types::Score;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Message sent by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "msg", rename_all = "camelCase")]
pub enum Request {
    /// Score the domain of the page at `url`.
    GetPrivacyScore { url: String },
    /// Queue the domain of the page at `url` for manual review.
    RequestReview { url: String },
}

/// Message returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message")]
pub enum Response {
    /// A freshly fetched score; the overlay should show itself.
    ActiveTabScore {
        score: Score,
        #[serde(rename = "previousScore")]
        previous_score: Option<Score>,
        domain: String,
    },
    /// A score served from the cache; the overlay stays hidden.
    HiddenTabScore {
        score: Score,
        #[serde(rename = "previousScore")]
        previous_score: Option<Score>,
        domain: String,
    },
    /// The domain has no score.
    NotFound { domain: String },
    /// A review request was submitted.
    ReviewRequested { domain: String },
    /// The request failed. Only produced by transports.
    Error { error: String },
}

impl Response {
    /// Map a lookup outcome onto the message the overlay expects.
    pub fn from_outcome(domain: String, outcome: &Outcome) -> Self {
        let record = outcome.record();

        match (outcome, record.score) {
            (Outcome::Fetched(_), Some(score)) => Self::ActiveTabScore {
                score,
                previous_score: record.previous_score,
                domain,
            },
            (Outcome::Cached(_), Some(score)) => Self::HiddenTabScore {
                score,
                previous_score: record.previous_score,
                domain,
            },
            _ => Self::NotFound { domain },
        }
    }
}

/// Dispatches requests to a shared `ScoreCache`.
#[derive(Clone)]
pub struct MessageHandler {
    cache: Arc<ScoreCache>,
}

impl MessageHandler {
    pub fn new(cache: Arc<ScoreCache>) -> Self {
        Self { cache }
    }

    /// Handle one request.
    ///
    /// Returns `Ok(None)` when the URL has no extractable domain. Review
    /// requests never fail: a failed POST is logged and still acknowledged.
    pub async fn handle(&self, request: Request) -> ScoreResult<Option<Response>> {
        match request {
            Request::GetPrivacyScore { url } => {
                let looked_up = self.cache.lookup_url(&url).await?;
                Ok(looked_up.map(|(domain, outcome)| Response::from_outcome(domain, &outcome)))
            }
            Request::RequestReview { url } => {
                let Ok(domain) = self.cache.extractor().extract(&url) else {
                    return Ok(None);
                };

                if let Err(e) = self.cache.request_review(&url).await {
                    warn!(domain = %domain, error = %e, "review request failed");
                }
                Ok(Some(Response::ReviewRequested { domain }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{FetchedScore, ScoreFetcher};
    use crate::clock::ManualClock;
    use crate::error::ScoreError;
    use crate::freshness::FreshnessPolicy;
    use crate::storage::{MemoryStore, ScoreStore};
    use crate::types::ScoreRecord;
    use async_trait::async_trait;

    struct FixedFetcher(FetchedScore);

    #[async_trait]
    impl ScoreFetcher for FixedFetcher {
        async fn fetch_score(&self, _domain: &str) -> ScoreResult<FetchedScore> {
            Ok(self.0)
        }

        async fn request_review(&self, _domain: &str) -> ScoreResult<()> {
            Err(ScoreError::RemoteFetch {
                status: None,
                message: "offline".to_string(),
            })
        }
    }

    fn score(v: u16) -> Score {
        Score::new(v).unwrap()
    }

    fn handler(store: Arc<MemoryStore>, answer: FetchedScore) -> MessageHandler {
        let cache = ScoreCache::new(store, Arc::new(FixedFetcher(answer)), FreshnessPolicy::default())
            .with_clock(Arc::new(ManualClock::new(1_000)));
        MessageHandler::new(Arc::new(cache))
    }

    #[test]
    fn test_request_wire_format() {
        let request: Request =
            serde_json::from_str(r#"{"msg":"getPrivacyScore","url":"https://a.com/"}"#).unwrap();
        assert_eq!(
            request,
            Request::GetPrivacyScore {
                url: "https://a.com/".to_string()
            }
        );

        let request: Request =
            serde_json::from_str(r#"{"msg":"requestReview","url":"https://a.com/"}"#).unwrap();
        assert!(matches!(request, Request::RequestReview { .. }));
    }

    #[test]
    fn test_response_wire_format() {
        let response = Response::ActiveTabScore {
            score: score(720),
            previous_score: None,
            domain: "example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "message": "ActiveTabScore",
                "score": 720,
                "previousScore": null,
                "domain": "example.com"
            })
        );

        let response = Response::NotFound {
            domain: "x.org".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"message":"NotFound","domain":"x.org"}"#
        );
    }

    #[tokio::test]
    async fn test_fetched_then_hidden() {
        let store = Arc::new(MemoryStore::new());
        let handler = handler(
            store,
            FetchedScore::Found {
                score: score(700),
                previous_score: None,
            },
        );
        let request = Request::GetPrivacyScore {
            url: "https://www.example.com/".to_string(),
        };

        let first = handler.handle(request.clone()).await.unwrap().unwrap();
        assert!(matches!(first, Response::ActiveTabScore { ref domain, .. } if domain == "example.com"));

        let second = handler.handle(request).await.unwrap().unwrap();
        assert!(matches!(second, Response::HiddenTabScore { .. }));
    }

    #[tokio::test]
    async fn test_cached_null_score_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        store.set("example.com", &ScoreRecord::not_found(900)).await.unwrap();
        let handler = handler(store, FetchedScore::NotFound);

        let response = handler
            .handle(Request::GetPrivacyScore {
                url: "https://example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            response,
            Some(Response::NotFound {
                domain: "example.com".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_unparsable_url_is_skipped() {
        let handler = handler(Arc::new(MemoryStore::new()), FetchedScore::NotFound);

        let response = handler
            .handle(Request::GetPrivacyScore {
                url: "about:blank".to_string(),
            })
            .await
            .unwrap();
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_review_failure_still_acknowledged() {
        let handler = handler(Arc::new(MemoryStore::new()), FetchedScore::NotFound);

        let response = handler
            .handle(Request::RequestReview {
                url: "https://shop.example.com.au/cart".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            response,
            Some(Response::ReviewRequested {
                domain: "example.com.au".to_string()
            })
        );
    }
}
