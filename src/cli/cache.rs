//! Cache subcommand implementation.
//!
//! Handles `scorecache cache` for inspecting and maintaining stored records.

use crate::cli::{Context, OutputFormat};
use crate::clock::{Clock, SystemClock};
use crate::domain::DomainExtractor;
use crate::error::{CliError, CliResult};
use crate::freshness::{FreshnessPolicy, MILLIS_PER_DAY};
use crate::output::{self, ScoreReport};
use crate::storage::{JsonStore, ScoreStore};
use crate::types::ScoreRecord;
use clap::{Parser, Subcommand};
use console::style;
use tracing::info;

/// Inspect and maintain cached records.
#[derive(Parser, Debug)]
pub struct CacheCommand {
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache maintenance actions.
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// List every cached record
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        output: OutputFormat,
    },

    /// Show the cached record for a domain
    Show {
        /// Domain, hostname or URL
        domain: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        output: OutputFormat,
    },

    /// Show storage statistics
    Stats,

    /// Delete the cached record for a domain, even if it no longer parses
    Remove {
        /// Domain, hostname or URL
        domain: String,
    },

    /// Delete expired records
    Prune {
        /// Delete records older than N days instead of applying the
        /// freshness windows
        #[arg(long, value_name = "DAYS")]
        days: Option<u32>,
    },

    /// Delete every cached record
    Clear {
        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

impl CacheCommand {
    /// Execute the cache command.
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let store = ctx.store()?;
        let policy = ctx.settings.policy();

        match &self.action {
            CacheAction::List { output } => list_records(&store, &policy, *output).await,
            CacheAction::Show { domain, output } => {
                show_record(&store, &policy, domain, *output).await
            }
            CacheAction::Stats => show_stats(&store, &policy).await,
            CacheAction::Remove { domain } => {
                let key = record_key(domain);
                if !store.remove(&key).await? {
                    return Err(CliError::Other(format!("no cached record for '{}'", key)));
                }
                if !ctx.quiet {
                    output::print_success(&format!("Removed record for {}", key));
                }
                Ok(())
            }
            CacheAction::Prune { days } => {
                let removed = prune(&store, &policy, *days, SystemClock.now_millis()).await?;
                if !ctx.quiet {
                    output::print_success(&format!("Removed {} expired record(s)", removed));
                }
                Ok(())
            }
            CacheAction::Clear { yes } => clear(&store, *yes, ctx.quiet).await,
        }
    }
}

async fn list_records(store: &JsonStore, policy: &FreshnessPolicy, format: OutputFormat) -> CliResult<()> {
    let now = SystemClock.now_millis();
    let mut records = store.list().await?;
    records.sort_by(|a, b| a.0.cmp(&b.0));

    let reports: Vec<ScoreReport> = records
        .iter()
        .map(|(domain, record)| ScoreReport::from_stored(domain, record, policy, now))
        .collect();

    output::print_reports(&reports, format)?;
    Ok(())
}

async fn show_record(
    store: &JsonStore,
    policy: &FreshnessPolicy,
    input: &str,
    format: OutputFormat,
) -> CliResult<()> {
    let domain = record_key(input);

    let record = store
        .get(&domain)
        .await?
        .ok_or_else(|| CliError::Other(format!("no cached record for '{}'", domain)))?;

    let report = ScoreReport::from_stored(&domain, &record, policy, SystemClock.now_millis());
    output::print_reports(&[report], format)?;
    Ok(())
}

/// Store key for a user-supplied domain, hostname or URL.
fn record_key(input: &str) -> String {
    DomainExtractor::default()
        .extract(input)
        .unwrap_or_else(|_| input.to_string())
}

async fn show_stats(store: &JsonStore, policy: &FreshnessPolicy) -> CliResult<()> {
    let stats = store.stats().await?;
    let format_time = |t: Option<chrono::DateTime<chrono::Utc>>| {
        t.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    println!();
    println!("  {} {}", style("Location:").bold(), store.records_dir().display());
    println!(
        "  {} {} ({} scored, {} without score)",
        style("Records:").bold(),
        style(stats.record_count).white().bold(),
        style(stats.scored_count).green(),
        style(stats.record_count - stats.scored_count).yellow()
    );
    println!("  {} {} bytes", style("Size:").bold(), stats.total_size_bytes);
    println!("  {} {}", style("Oldest:").bold(), format_time(stats.oldest_record));
    println!("  {} {}", style("Newest:").bold(), format_time(stats.newest_record));
    println!(
        "  {} {} days scored, {} days unscored",
        style("Windows:").bold(),
        policy.last_score_expiration_days,
        policy.no_score_expiration_days
    );
    println!();

    Ok(())
}

/// Remove records that are expired at `now`.
///
/// With `days`, a record is expired once it is at least that many days old
/// regardless of its score; otherwise the freshness windows decide.
pub async fn prune(
    store: &dyn ScoreStore,
    policy: &FreshnessPolicy,
    days: Option<u32>,
    now: i64,
) -> CliResult<usize> {
    let expired = |record: &ScoreRecord| match days {
        Some(days) => {
            now.saturating_sub(record.score_date) >= i64::from(days).saturating_mul(MILLIS_PER_DAY)
        }
        None => policy.is_expired(record, now),
    };

    let mut removed = 0;
    for (domain, record) in store.list().await? {
        if expired(&record) && store.remove(&domain).await? {
            removed += 1;
        }
    }

    info!(removed, "pruned cache");
    Ok(removed)
}

async fn clear(store: &JsonStore, yes: bool, quiet: bool) -> CliResult<()> {
    if !yes {
        println!("Delete every cached record in {}? [y/N] ", store.records_dir().display());
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = store.clear().await?;

    if !quiet {
        output::print_success(&format!("Removed {} record(s)", removed));
    }

    Ok(())
}
