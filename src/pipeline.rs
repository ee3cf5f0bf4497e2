//! In-memory pipeline orchestration.
//!
//! The crate's only boundary is tabular data: the caller loads benchmark
//! rows, family-reference rows, and series rows however it likes, and writes
//! the returned tables wherever it likes. Everything in between is a
//! deterministic function of its inputs; repeated calls with identical
//! inputs yield identical outputs. Unmatched rows are silently dropped by
//! inner-join semantics; a caller wanting drop counts diffs row counts
//! before and after.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::errors::PipelineError;
use crate::numeric;
use crate::series::SeriesFamilyRow;
use crate::stats::{summarize, FamilySummary};
use crate::table::{assign_identity_columns, inner_join, Row, Value};
use crate::types::{FamilyLabel, SeriesLabel};

/// Average blended power for one machine series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPower {
    /// Machine-series label.
    pub series: SeriesLabel,
    /// Mean blended power across the series' matched families; missing when
    /// no matched family had per-thread data.
    pub blended_watts: Value,
}

/// Check that at least one row carries the column; empty tables pass.
fn require_column(rows: &[Row], column: &str) -> Result<(), PipelineError> {
    if rows.is_empty() || rows.iter().any(|row| row.contains_key(column)) {
        return Ok(());
    }
    Err(PipelineError::MissingColumn {
        column: column.to_string(),
    })
}

/// Key the whole benchmark table, join it to each family's reference rows,
/// and summarize.
///
/// Returns the whole-table summary first (labeled with
/// `config.overall_label`), then one summary per configured family in
/// configuration order. A configured family with no reference table is
/// skipped with a warning; a family whose join comes up empty still yields a
/// summary (all statistics missing) so report shape stays stable.
pub fn family_power_report(
    benchmark_rows: &[Row],
    family_tables: &IndexMap<FamilyLabel, Vec<Row>>,
    config: &PipelineConfig,
) -> Result<Vec<FamilySummary>, PipelineError> {
    config.validate()?;
    require_column(benchmark_rows, &config.description_column)?;

    let keyed_benchmark = assign_identity_columns(benchmark_rows, &config.description_column);
    debug!(rows = keyed_benchmark.len(), "keyed benchmark table");

    let mut report = vec![summarize(
        &keyed_benchmark,
        &config.overall_label,
        config.utilization,
    )];

    for family in &config.families {
        let Some(reference_rows) = family_tables.get(family) else {
            warn!(family = family.as_str(), "no reference table for configured family");
            continue;
        };
        require_column(reference_rows, &config.description_column)?;
        let keyed_family = assign_identity_columns(reference_rows, &config.description_column);
        let joined = inner_join(&keyed_benchmark, &keyed_family);
        debug!(
            family = family.as_str(),
            reference_rows = keyed_family.len(),
            matched_rows = joined.len(),
            "joined family reference data"
        );
        if joined.is_empty() {
            warn!(family = family.as_str(), "family matched no benchmark rows");
        }
        report.push(summarize(&joined, family, config.utilization));
    }
    Ok(report)
}

/// Average blended power per machine series.
///
/// Inner-joins the expanded (series, family) mapping to the per-family
/// summaries on the family label, then averages blended power per series.
/// Series with no summarized family are dropped; families whose blended
/// estimate is missing are ignored by the mean, and a series whose every
/// family is missing comes back with a missing estimate.
pub fn series_power_index(
    mapping: &[SeriesFamilyRow],
    summaries: &[FamilySummary],
) -> Vec<SeriesPower> {
    let mut per_series: IndexMap<SeriesLabel, Vec<Option<f64>>> = IndexMap::new();
    for pair in mapping {
        let Some(summary) = summaries.iter().find(|summary| summary.family == pair.family) else {
            continue;
        };
        per_series
            .entry(pair.series.clone())
            .or_default()
            .push(summary.blended_power());
    }

    per_series
        .into_iter()
        .map(|(series, blended)| SeriesPower {
            series,
            blended_watts: match numeric::mean(&blended) {
                Some(watts) => Value::Number(watts),
                None => Value::Missing,
            },
        })
        .collect()
}
