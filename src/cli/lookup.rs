//! Lookup subcommand implementation.
//!
//! Handles the `scorecache lookup <url>...` command.

use crate::cache::ScoreCache;
use crate::cli::{Context, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::{self, ReportStatus, ScoreReport};
use clap::Parser;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::debug;

/// Look up the score for one or more URLs.
#[derive(Parser, Debug)]
pub struct LookupCommand {
    /// Page URLs or bare hostnames to look up
    ///
    /// Examples:
    ///   https://www.example.com/page
    ///   shop.example.co.uk
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Maximum number of concurrent lookups (defaults to the configured value)
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,
}

impl LookupCommand {
    /// Execute the lookup command.
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let cache = Arc::new(ctx.cache()?);
        let concurrency = self.concurrency.unwrap_or(ctx.settings.concurrency).max(1);

        let progress = if ctx.verbose && !ctx.quiet && self.urls.len() > 1 {
            let pb = ProgressBar::new(self.urls.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .map_err(|e| CliError::Other(e.to_string()))?
                    .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let reports = run_lookups(cache, &self.urls, concurrency, progress.as_ref()).await;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        output::print_reports(&reports, self.output)?;

        let failed = reports
            .iter()
            .filter(|r| r.status == ReportStatus::Failed)
            .count();
        if failed > 0 {
            return Err(CliError::Other(format!(
                "{} of {} lookups failed",
                failed,
                reports.len()
            )));
        }

        Ok(())
    }
}

/// Look up every URL with at most `concurrency` in flight, returning
/// reports in input order.
pub async fn run_lookups(
    cache: Arc<ScoreCache>,
    urls: &[String],
    concurrency: usize,
    progress: Option<&ProgressBar>,
) -> Vec<ScoreReport> {
    let mut indexed: Vec<(usize, ScoreReport)> = stream::iter(urls.iter().cloned().enumerate())
        .map(|(index, url)| {
            let cache = Arc::clone(&cache);
            let progress = progress.cloned();

            async move {
                let report = lookup_one(&cache, &url).await;
                if let Some(pb) = progress {
                    pb.set_message(report.domain.clone().unwrap_or_default());
                    pb.inc(1);
                }
                (index, report)
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, report)| report).collect()
}

async fn lookup_one(cache: &ScoreCache, url: &str) -> ScoreReport {
    let domain = match cache.extractor().extract(url) {
        Ok(domain) => domain,
        Err(e) => {
            debug!(url = %url, error = %e, "skipping input");
            return ScoreReport::skipped(url);
        }
    };

    match cache.lookup(&domain).await {
        Ok(outcome) => ScoreReport::from_outcome(url, &domain, &outcome, cache.policy()),
        Err(e) => ScoreReport::failed(url, Some(&domain), &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{FetchedScore, ScoreFetcher};
    use crate::clock::ManualClock;
    use crate::error::{ScoreError, ScoreResult};
    use crate::freshness::FreshnessPolicy;
    use crate::storage::MemoryStore;
    use crate::types::Score;
    use async_trait::async_trait;

    struct ByDomain;

    #[async_trait]
    impl ScoreFetcher for ByDomain {
        async fn fetch_score(&self, domain: &str) -> ScoreResult<FetchedScore> {
            match domain {
                "example.com" => Ok(FetchedScore::Found {
                    score: Score::new(700).unwrap(),
                    previous_score: None,
                }),
                "broken.com" => Err(ScoreError::RemoteFetch {
                    status: Some(500),
                    message: "HTTP 500".to_string(),
                }),
                _ => Ok(FetchedScore::NotFound),
            }
        }

        async fn request_review(&self, _domain: &str) -> ScoreResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_lookups_preserves_order() {
        let cache = ScoreCache::new(
            Arc::new(MemoryStore::new()),
            Arc::new(ByDomain),
            FreshnessPolicy::default(),
        )
        .with_clock(Arc::new(ManualClock::new(0)));

        let urls: Vec<String> = [
            "https://www.example.com/a",
            "about:blank",
            "https://broken.com",
            "https://unknown.org",
            "https://example.com/b",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let reports = run_lookups(Arc::new(cache), &urls, 4, None).await;
        let statuses: Vec<ReportStatus> = reports.iter().map(|r| r.status).collect();

        assert_eq!(reports[0].input, "https://www.example.com/a");
        assert_eq!(statuses[1], ReportStatus::Skipped);
        assert_eq!(statuses[2], ReportStatus::Failed);
        assert_eq!(statuses[3], ReportStatus::NotFound);
        // The two example.com lookups share one fetch.
        let example: Vec<ReportStatus> = vec![statuses[0], statuses[4]];
        assert!(example.contains(&ReportStatus::Fetched));
        assert!(example.contains(&ReportStatus::Cached));
    }
}
