//! Machine-series expansion: one (series, family) row per compatible family.
//!
//! Source data lists a series once per category ("General-purpose",
//! "Shared-core", ...) with a newline-delimited text field of compatible
//! processor families. Expansion explodes that field into rows and drops the
//! exact duplicate pairs that appear when the same series shows up under
//! several categories with identical family lists.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::table::{Row, Value};
use crate::types::{FamilyLabel, SeriesLabel};

/// One (series, family) compatibility pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesFamilyRow {
    /// Cleaned machine-series label, e.g. `E2`.
    pub series: SeriesLabel,
    /// Compatible processor-family label, e.g. `AMD EPYC Rome`.
    pub family: FamilyLabel,
}

/// Clean a marketing series label: the first alphanumeric run of the first
/// whitespace-delimited token (`"E2* General-purpose"` → `"E2"`).
pub fn clean_series_label(raw: &str) -> SeriesLabel {
    let first_token = raw.split_whitespace().next().unwrap_or("");
    match first_token.find(|ch: char| ch.is_ascii_alphanumeric()) {
        Some(start) => first_token[start..]
            .chars()
            .take_while(char::is_ascii_alphanumeric)
            .collect(),
        None => String::new(),
    }
}

/// Explode series rows into deduplicated (series, family) pairs.
///
/// The series cell is cleaned via [`clean_series_label`]; the families cell
/// is split on newlines, entries trimmed, empties skipped. First occurrence
/// order is preserved; later exact duplicates are dropped.
pub fn expand(
    series_rows: &[Row],
    series_column: &str,
    families_column: &str,
) -> Vec<SeriesFamilyRow> {
    let mut seen: HashSet<(SeriesLabel, FamilyLabel)> = HashSet::new();
    let mut pairs = Vec::new();
    for row in series_rows {
        let series = clean_series_label(
            row.get(series_column)
                .and_then(Value::as_text)
                .unwrap_or(""),
        );
        let families = row
            .get(families_column)
            .and_then(Value::as_text)
            .unwrap_or("");
        for family in families.split('\n') {
            let family = family.trim();
            if family.is_empty() {
                continue;
            }
            if seen.insert((series.clone(), family.to_string())) {
                pairs.push(SeriesFamilyRow {
                    series: series.clone(),
                    family: family.to_string(),
                });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_row(series: &str, families: &str) -> Row {
        Row::from_iter([
            ("series".to_string(), Value::from(series)),
            ("families".to_string(), Value::from(families)),
        ])
    }

    #[test]
    fn clean_series_label_strips_marketing_text() {
        assert_eq!(clean_series_label("E2* General-purpose"), "E2");
        assert_eq!(clean_series_label("N1"), "N1");
        assert_eq!(clean_series_label("*M2 Memory-optimized"), "M2");
        assert_eq!(clean_series_label(""), "");
    }

    #[test]
    fn expand_explodes_newline_delimited_families() {
        let rows = vec![series_row("E2* General-purpose", "Skylake\nBroadwell\nHaswell\nAMD EPYC Rome")];
        let pairs = expand(&rows, "series", "families");
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], SeriesFamilyRow { series: "E2".into(), family: "Skylake".into() });
        assert_eq!(pairs[3], SeriesFamilyRow { series: "E2".into(), family: "AMD EPYC Rome".into() });
    }

    #[test]
    fn expand_drops_exact_duplicate_pairs() {
        // E2 listed under two categories with identical family lists.
        let rows = vec![
            series_row("E2* General-purpose", "Skylake\nBroadwell"),
            series_row("E2* Shared-core", "Skylake\nBroadwell"),
            series_row("N2 General-purpose", "Skylake"),
        ];
        let pairs = expand(&rows, "series", "families");
        assert_eq!(pairs.len(), 3);
        assert_eq!(
            pairs
                .iter()
                .filter(|pair| pair.series == "E2" && pair.family == "Skylake")
                .count(),
            1
        );
    }

    #[test]
    fn expand_skips_empty_entries() {
        let rows = vec![series_row("E2", "Skylake\n\n  \nBroadwell")];
        let pairs = expand(&rows, "series", "families");
        assert_eq!(pairs.len(), 2);
    }
}
