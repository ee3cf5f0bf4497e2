//! Power and ratio aggregation over joined benchmark rows.
//!
//! One thread is treated as close enough to one vCPU, so watts-per-thread is
//! the ratio the blended estimate is built on; watts-per-core and
//! threads-per-core ride along because they are worth eyeballing in reports.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::columns;
use crate::numeric::{self, safe_divide, sanitize, to_float};
use crate::table::{Row, Value};
use crate::types::{ColumnName, FamilyLabel};

/// Aggregate over a set of benchmark rows sharing a family label.
///
/// Created once per family per pipeline run and never mutated afterwards.
/// Every statistic is `Value::Missing` when no underlying row carried a
/// usable value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FamilySummary {
    /// Family label this summary reduces.
    pub family: FamilyLabel,
    /// Number of rows reduced.
    pub row_count: usize,
    /// Arithmetic mean per numeric and derived column, in
    /// [`columns::MEAN_FIELDS`] order.
    pub means: IndexMap<ColumnName, Value>,
    /// Blended power estimate (estimated average watts per thread), computed
    /// from the already-averaged per-thread ratios.
    pub blended_watts: Value,
    /// Earliest launch year seen.
    pub min_year: Value,
    /// Latest launch year seen.
    pub max_year: Value,
    /// Median launch year.
    pub median_year: Value,
}

impl FamilySummary {
    /// Blended power as a float, if any row carried per-thread data.
    pub fn blended_power(&self) -> Option<f64> {
        self.blended_watts.as_number()
    }
}

/// Blended power estimate: idle watts plus a utilization-weighted share of
/// the idle-to-full-load delta.
pub fn blended_power(idle_watts: f64, max_watts: f64, utilization: f64) -> f64 {
    idle_watts + utilization * (max_watts - idle_watts)
}

/// Sanitize every known numeric column of a row; other columns untouched.
pub fn sanitize_numeric_columns(row: &Row) -> Row {
    let mut cleaned = row.clone();
    for column in columns::MEAN_FIELDS.iter().chain([&columns::LAUNCH_YEAR]) {
        if let Some(value) = cleaned.get_mut(*column) {
            *value = sanitize(value);
        }
    }
    cleaned
}

/// Attach the four watts ratios and threads-per-core to a row, each via the
/// safe-divide policy (degenerate denominators contribute 0, not missing).
pub fn derive_ratios(row: &Row) -> Row {
    let cell = |column: &str| row.get(column).cloned().unwrap_or(Value::Missing);
    let threads = cell(columns::THREADS);
    let cores = cell(columns::CORES);
    let idle = cell(columns::IDLE_WATTS);
    let max = cell(columns::MAX_WATTS);

    let mut derived = row.clone();
    derived.insert(
        columns::WATTS_PER_THREAD_IDLE.to_string(),
        Value::Number(safe_divide(&idle, &threads)),
    );
    derived.insert(
        columns::WATTS_PER_THREAD_MAX.to_string(),
        Value::Number(safe_divide(&max, &threads)),
    );
    derived.insert(
        columns::WATTS_PER_CORE_IDLE.to_string(),
        Value::Number(safe_divide(&idle, &cores)),
    );
    derived.insert(
        columns::WATTS_PER_CORE_MAX.to_string(),
        Value::Number(safe_divide(&max, &cores)),
    );
    derived.insert(
        columns::THREADS_PER_CORE.to_string(),
        Value::Number(safe_divide(&threads, &cores)),
    );
    derived
}

fn wrap(value: Option<f64>) -> Value {
    match value {
        Some(number) => Value::Number(number),
        None => Value::Missing,
    }
}

/// Reduce a set of rows to a [`FamilySummary`].
///
/// Every numeric field is sanitized first, then the ratios are derived, then
/// each column in [`columns::MEAN_FIELDS`] is averaged ignoring missing
/// entries. The blended estimate uses the averaged per-thread ratios, not a
/// per-row blend re-averaged; the order matters for reproducibility and for
/// matching the published methodology.
pub fn summarize(rows: &[Row], family: &str, utilization: f64) -> FamilySummary {
    let prepared: Vec<Row> = rows
        .iter()
        .map(|row| derive_ratios(&sanitize_numeric_columns(row)))
        .collect();

    let mut means: IndexMap<ColumnName, Value> = IndexMap::new();
    for column in columns::MEAN_FIELDS {
        let values: Vec<Option<f64>> = prepared
            .iter()
            .map(|row| row.get(column).and_then(|value| to_float(value)))
            .collect();
        means.insert(column.to_string(), wrap(numeric::mean(&values)));
    }

    let idle_mean = means[columns::WATTS_PER_THREAD_IDLE].as_number();
    let max_mean = means[columns::WATTS_PER_THREAD_MAX].as_number();
    let blended_watts = match (idle_mean, max_mean) {
        (Some(idle), Some(max)) => Value::Number(blended_power(idle, max, utilization)),
        _ => Value::Missing,
    };

    let years: Vec<Option<f64>> = prepared
        .iter()
        .map(|row| row.get(columns::LAUNCH_YEAR).and_then(|value| to_float(value)))
        .collect();

    FamilySummary {
        family: family.to_string(),
        row_count: rows.len(),
        means,
        blended_watts,
        min_year: wrap(numeric::min(&years)),
        max_year: wrap(numeric::max(&years)),
        median_year: wrap(numeric::median(&years)),
    }
}
