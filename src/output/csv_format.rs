//! CSV output formatting.

use super::ScoreReport;
use std::io::{self, Write};

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write reports as CSV with a header row.
pub fn write_csv<W: Write>(out: &mut W, reports: &[ScoreReport]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record([
        "input",
        "domain",
        "status",
        "score",
        "percent",
        "previous_score",
        "trend",
        "rating",
        "score_date",
        "expires_at",
        "error",
    ])?;

    for report in reports {
        wtr.write_record([
            report.input.clone(),
            report.domain.clone().unwrap_or_default(),
            report.status.to_string(),
            opt(report.score),
            opt(report.percent.map(|p| format!("{:.1}", p))),
            opt(report.previous_score),
            opt(report.trend),
            opt(report.rating),
            opt(report.score_date.map(|d| d.to_rfc3339())),
            opt(report.expires_at.map(|d| d.to_rfc3339())),
            report.error.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
