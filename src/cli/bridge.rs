//! Bridge subcommand implementation.
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout, so a browser extension host or any other process can
//! drive the cache.

use crate::cli::Context;
use crate::error::CliResult;
use crate::messages::{MessageHandler, Request, Response};
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

/// Serve newline-delimited JSON messages over stdin/stdout.
#[derive(Parser, Debug)]
pub struct BridgeCommand {}

impl BridgeCommand {
    /// Execute the bridge command. Returns when stdin is closed.
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let handler = MessageHandler::new(Arc::new(ctx.cache()?));
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();

        let served = serve(&handler, stdin, stdout).await?;
        debug!(served, "bridge closed");
        Ok(())
    }
}

/// Answer every request line from `reader` on `writer`.
///
/// Blank lines are ignored and malformed lines are logged and skipped. A
/// request that fails, or whose URL has no domain, is answered with an
/// `Error` message. Returns the number of responses written.
pub async fn serve<R, W>(handler: &MessageHandler, mut reader: R, mut writer: W) -> CliResult<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut served = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!(error = %e, "ignoring message that is not UTF-8");
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "ignoring malformed message");
                continue;
            }
        };

        let url = match &request {
            Request::GetPrivacyScore { url } | Request::RequestReview { url } => url.clone(),
        };

        let response = match handler.handle(request).await {
            Ok(Some(response)) => response,
            Ok(None) => Response::Error {
                error: format!("no domain in '{}'", url),
            },
            Err(e) => {
                warn!(url = %url, error = %e, "request failed");
                Response::Error {
                    error: e.to_string(),
                }
            }
        };

        let mut encoded = serde_json::to_vec(&response).map_err(std::io::Error::other)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
        served += 1;
    }

    Ok(served)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ScoreCache;
    use crate::client::{FetchedScore, ScoreFetcher};
    use crate::error::{ScoreError, ScoreResult};
    use crate::freshness::FreshnessPolicy;
    use crate::storage::MemoryStore;
    use crate::types::Score;
    use async_trait::async_trait;

    struct Fixed;

    #[async_trait]
    impl ScoreFetcher for Fixed {
        async fn fetch_score(&self, domain: &str) -> ScoreResult<FetchedScore> {
            if domain == "down.com" {
                return Err(ScoreError::RemoteFetch {
                    status: Some(503),
                    message: "HTTP 503".to_string(),
                });
            }
            Ok(FetchedScore::Found {
                score: Score::new(650).unwrap(),
                previous_score: None,
            })
        }

        async fn request_review(&self, _domain: &str) -> ScoreResult<()> {
            Ok(())
        }
    }

    fn handler() -> MessageHandler {
        let cache = ScoreCache::new(
            Arc::new(MemoryStore::new()),
            Arc::new(Fixed),
            FreshnessPolicy::default(),
        );
        MessageHandler::new(Arc::new(cache))
    }

    #[tokio::test]
    async fn test_serve_lines() {
        let input = concat!(
            r#"{"msg":"getPrivacyScore","url":"https://www.example.com/"}"#,
            "\n",
            "not json\n",
            "\n",
            r#"{"msg":"getPrivacyScore","url":"https://example.com/other"}"#,
            "\n",
            r#"{"msg":"getPrivacyScore","url":"https://down.com"}"#,
            "\n",
            r#"{"msg":"requestReview","url":"https://a.example.org"}"#,
            "\n",
        );

        let mut out = Vec::new();
        let served = serve(&handler(), input.as_bytes(), &mut out).await.unwrap();
        assert_eq!(served, 4);

        let responses: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(responses[0]["message"], "ActiveTabScore");
        assert_eq!(responses[0]["score"], 650);
        assert_eq!(responses[1]["message"], "HiddenTabScore");
        assert_eq!(responses[2]["message"], "Error");
        assert!(responses[2]["error"].as_str().unwrap().contains("503"));
        assert_eq!(responses[3]["message"], "ReviewRequested");
        assert_eq!(responses[3]["domain"], "example.org");
    }

    #[tokio::test]
    async fn test_serve_skips_invalid_utf8() {
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(br#"{"msg":"getPrivacyScore","url":"https://example.com"}"#);
        input.push(b'\n');

        let mut out = Vec::new();
        let served = serve(&handler(), input.as_slice(), &mut out).await.unwrap();
        assert_eq!(served, 1);

        let response: Response = serde_json::from_slice(&out).unwrap();
        assert!(matches!(response, Response::ActiveTabScore { ref domain, .. } if domain == "example.com"));
    }

    #[tokio::test]
    async fn test_serve_unparsable_url() {
        let input = r#"{"msg":"getPrivacyScore","url":"about:blank"}"#;

        let mut out = Vec::new();
        serve(&handler(), input.as_bytes(), &mut out).await.unwrap();

        let response: Response = serde_json::from_slice(&out).unwrap();
        assert!(matches!(response, Response::Error { .. }));
    }
}
