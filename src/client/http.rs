//! HTTP client for the scoring API.

use super::{FetchedScore, RateLimiter, ScoreFetcher};
use crate::error::{ScoreError, ScoreResult};
use crate::types::Score;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// User agent for API requests.
const USER_AGENT_VALUE: &str = concat!("scorecache/", env!("CARGO_PKG_VERSION"));

/// Production scoring service.
pub const DEFAULT_BASE_URL: &str = "https://api.privacymonitor.com";

/// Connection settings for `ScoreClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin, with or without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Requests per second, 0 for unlimited.
    pub rate_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            rate_limit: 0,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
        self.rate_limit = rate_limit;
        self
    }
}

/// Body of `GET /score`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScorePayload {
    #[serde(default)]
    score: Option<i64>,
    #[serde(default)]
    previous_score: Option<i64>,
}

/// Body of `POST /analysis`.
#[derive(Debug, Serialize)]
struct ReviewRequest<'a> {
    domain: &'a str,
}

/// Scoring API client.
#[derive(Debug, Clone)]
pub struct ScoreClient {
    client: reqwest::Client,
    base_url: String,
    limiter: Option<RateLimiter>,
}

impl ScoreClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> ScoreResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url)
            .map_err(|e| ScoreError::ClientConfig(format!("base URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ScoreError::ClientConfig(format!(
                "base URL '{}' must use http or https",
                base_url
            )));
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| ScoreError::ClientConfig(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            limiter: RateLimiter::new(config.rate_limit),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ScoreResult<Url> {
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| ScoreError::ClientConfig(e.to_string()))
    }

    async fn throttle(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.wait().await;
        }
    }
}

#[async_trait]
impl ScoreFetcher for ScoreClient {
    async fn fetch_score(&self, domain: &str) -> ScoreResult<FetchedScore> {
        let mut url = self.endpoint("score")?;
        url.query_pairs_mut().append_pair("q", domain);

        self.throttle().await;
        debug!(domain = %domain, url = %url, "fetching score");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!(domain = %domain, "no score (404)");
            return Ok(FetchedScore::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoreError::RemoteFetch {
                status: Some(status.as_u16()),
                message: format!("HTTP {}: {}", status.as_u16(), body.trim()),
            });
        }

        let body = response.text().await?;
        parse_score_body(&body)
    }

    async fn request_review(&self, domain: &str) -> ScoreResult<()> {
        let url = self.endpoint("analysis")?;

        self.throttle().await;
        let response = self
            .client
            .post(url)
            .json(&ReviewRequest { domain })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(domain = %domain, status = status.as_u16(), "review requested");
        } else {
            warn!(domain = %domain, status = status.as_u16(), "review request not accepted");
        }

        Ok(())
    }
}

/// Interpret a 2xx body from `GET /score`.
///
/// An empty body, a `null` body, or a missing/null/zero score all mean the
/// domain has no review.
fn parse_score_body(body: &str) -> ScoreResult<FetchedScore> {
    let body = body.trim();
    if body.is_empty() || body == "null" {
        return Ok(FetchedScore::NotFound);
    }

    let payload: ScorePayload = serde_json::from_str(body)
        .map_err(|e| ScoreError::InvalidResponse(format!("malformed score payload: {}", e)))?;

    let raw = match payload.score {
        None | Some(0) => return Ok(FetchedScore::NotFound),
        Some(raw) => raw,
    };

    let score =
        Score::try_from(raw).map_err(|e| ScoreError::InvalidResponse(e.to_string()))?;
    let previous_score = payload.previous_score.and_then(|p| Score::try_from(p).ok());

    Ok(FetchedScore::Found {
        score,
        previous_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_found() {
        let parsed = parse_score_body(r#"{"score": 712, "previousScore": 690}"#).unwrap();
        assert_eq!(
            parsed,
            FetchedScore::Found {
                score: Score::new(712).unwrap(),
                previous_score: Score::new(690),
            }
        );
    }

    #[test]
    fn test_parse_empty_payloads() {
        for body in ["", "  ", "null", "{}", r#"{"score": null}"#, r#"{"score": 0}"#] {
            assert_eq!(parse_score_body(body).unwrap(), FetchedScore::NotFound, "{:?}", body);
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            parse_score_body(r#"{"score": 9000}"#),
            Err(ScoreError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_score_body("<html>"),
            Err(ScoreError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_base_url_validation() {
        assert!(ScoreClient::new(ClientConfig::new("not a url")).is_err());
        assert!(ScoreClient::new(ClientConfig::new("ftp://example.com")).is_err());

        let client = ScoreClient::new(ClientConfig::new("https://api.example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
