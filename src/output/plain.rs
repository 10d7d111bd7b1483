//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use super::{ReportStatus, ScoreReport};
use crate::types::Trend;
use console::{style, Style};
use std::io::{self, Write};

const RULE: &str = "───────────────────────────────────────────────────────────────────────";

/// Write reports as a human-readable table.
pub fn write_plain<W: Write>(out: &mut W, reports: &[ScoreReport]) -> io::Result<()> {
    if reports.is_empty() {
        writeln!(out, "  {}", style("Nothing to display.").dim())?;
        return Ok(());
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(
        out,
        "  {:<28}  {:^10}  {:>5}  {:>5}  {:<13}  {}",
        style("DOMAIN").bold(),
        style("STATUS").bold(),
        style("SCORE").bold(),
        style("PREV").bold(),
        style("TREND").bold(),
        style("RATING").bold()
    )?;
    writeln!(out, "  {}", style(RULE).dim())?;

    for report in reports {
        let status_style = match report.status {
            ReportStatus::Fetched | ReportStatus::Fresh => Style::new().green().bold(),
            ReportStatus::Cached => Style::new().green(),
            ReportStatus::NotFound | ReportStatus::Stale | ReportStatus::Skipped => {
                Style::new().yellow()
            }
            ReportStatus::Failed => Style::new().red().bold(),
        };

        let name = report.domain.as_deref().unwrap_or(&report.input);
        let score = report.score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
        let previous = report
            .previous_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let trend = report.trend.map(|t| t.to_string()).unwrap_or_default();
        let trend_style = match report.trend {
            Some(Trend::Improving) => Style::new().green(),
            Some(Trend::GettingWorse) => Style::new().red(),
            _ => Style::new().dim(),
        };
        let detail = match (&report.error, report.rating) {
            (Some(error), _) => style(truncate_string(error, 40)).red().to_string(),
            (None, Some(rating)) => rating.to_string(),
            (None, None) => String::new(),
        };

        writeln!(
            out,
            "  {:<28}  {:^10}  {:>5}  {:>5}  {:<13}  {}",
            truncate_string(name, 28),
            status_style.apply_to(report.status.to_string()),
            score,
            style(previous).dim(),
            trend_style.apply_to(trend),
            detail
        )?;
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Truncate a string to at most `max_len` characters, adding an ellipsis if
/// truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
