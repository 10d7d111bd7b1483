//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of score
//! reports.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_error, print_info, print_success, print_warning, write_plain};

use crate::cache::Outcome;
use crate::cli::OutputFormat;
use crate::error::ScoreError;
use crate::freshness::FreshnessPolicy;
use crate::types::{Rating, Score, ScoreRecord, Trend};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// How a report row came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    /// Served from the cache by a lookup.
    Cached,
    /// Fetched from the service by a lookup.
    Fetched,
    /// The service has no score for the domain.
    NotFound,
    /// Stored record still inside its window.
    Fresh,
    /// Stored record past its window.
    Stale,
    /// No domain could be extracted.
    Skipped,
    /// The lookup failed.
    Failed,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cached => write!(f, "cached"),
            Self::Fetched => write!(f, "fetched"),
            Self::NotFound => write!(f, "not-found"),
            Self::Fresh => write!(f, "fresh"),
            Self::Stale => write!(f, "stale"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// One line of output: a domain and what is known about its score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub input: String,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub score: Option<Score>,
    /// Position of `score` on the 300-850 scale, 0-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    pub previous_score: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreReport {
    fn empty(input: impl Into<String>, status: ReportStatus) -> Self {
        Self {
            input: input.into(),
            status,
            domain: None,
            score: None,
            percent: None,
            previous_score: None,
            rating: None,
            trend: None,
            score_date: None,
            expires_at: None,
            error: None,
        }
    }

    fn with_record(mut self, domain: &str, record: &ScoreRecord, policy: &FreshnessPolicy) -> Self {
        self.domain = Some(domain.to_string());
        self.score = record.score;
        self.percent = record.score.map(Score::percent);
        self.previous_score = record.previous_score;
        self.rating = record.score.map(Score::rating);
        self.trend = record.score.map(|_| record.trend());
        self.score_date = record.written_at();
        self.expires_at = DateTime::<Utc>::from_timestamp_millis(policy.expires_at(record));
        self
    }

    /// Report for a completed lookup.
    pub fn from_outcome(
        input: &str,
        domain: &str,
        outcome: &Outcome,
        policy: &FreshnessPolicy,
    ) -> Self {
        let status = match outcome {
            Outcome::Cached(record) if record.has_score() => ReportStatus::Cached,
            Outcome::Fetched(_) => ReportStatus::Fetched,
            Outcome::Cached(_) | Outcome::NotFoundPersisted(_) => ReportStatus::NotFound,
        };
        Self::empty(input, status).with_record(domain, outcome.record(), policy)
    }

    /// Report for a stored record, classified against `now`.
    pub fn from_stored(domain: &str, record: &ScoreRecord, policy: &FreshnessPolicy, now: i64) -> Self {
        let status = if policy.is_expired(record, now) {
            ReportStatus::Stale
        } else {
            ReportStatus::Fresh
        };
        Self::empty(domain, status).with_record(domain, record, policy)
    }

    /// Report for an input with no extractable domain.
    pub fn skipped(input: &str) -> Self {
        Self::empty(input, ReportStatus::Skipped)
    }

    /// Report for a failed lookup.
    pub fn failed(input: &str, domain: Option<&str>, error: &ScoreError) -> Self {
        let mut report = Self::empty(input, ReportStatus::Failed);
        report.domain = domain.map(str::to_string);
        report.error = Some(error.to_string());
        report
    }
}

/// Write reports in the requested format.
pub fn write_reports<W: Write>(out: &mut W, reports: &[ScoreReport], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, reports),
        OutputFormat::Json => write_json(out, reports),
        OutputFormat::Csv => write_csv(out, reports),
    }
}

/// Print reports to stdout in the requested format.
pub fn print_reports(reports: &[ScoreReport], format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_reports(&mut out, reports, format)
}
