//! JSON output formatting.

use super::ScoreReport;
use std::io::{self, Write};

/// Write reports as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, reports: &[ScoreReport]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(reports).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Outcome;
    use crate::freshness::FreshnessPolicy;
    use crate::types::{Score, ScoreRecord};

    #[test]
    fn test_json_fields() {
        let record = ScoreRecord::scored(Score::new(812).unwrap(), None, 0);
        let report = ScoreReport::from_outcome(
            "example.com",
            "example.com",
            &Outcome::Cached(record),
            &FreshnessPolicy::default(),
        );

        let mut buf = Vec::new();
        write_json(&mut buf, &[report]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value[0]["status"], "cached");
        assert_eq!(value[0]["score"], 812);
        assert!(value[0]["previous_score"].is_null());
        assert_eq!(value[0]["domain"], "example.com");
        assert!(value[0].get("error").is_none());
    }
}
