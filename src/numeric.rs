//! Numeric sanitization and missing-aware reducers.
//!
//! Source spreadsheets deliver numbers as integers, comma-grouped strings,
//! or outright garbage ("HTML" has been seen in a year column). Everything
//! numeric funnels through [`to_float`], which yields `None` for anything
//! unparseable; nothing in this module can panic on malformed data.

use crate::table::Value;

/// Coerce a cell into a finite float, stripping embedded thousands-separator
/// commas first. `None` is the missing sentinel: unparseable text, absent
/// cells, and non-finite numbers all land there, never zero and never an
/// error.
pub fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => Some(*number).filter(|n| n.is_finite()),
        Value::Text(text) => text
            .replace(',', "")
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite()),
        Value::Missing => None,
    }
}

/// Sanitize a cell in place: numeric content becomes `Value::Number`,
/// everything else `Value::Missing`.
pub fn sanitize(value: &Value) -> Value {
    match to_float(value) {
        Some(number) => Value::Number(number),
        None => Value::Missing,
    }
}

/// Divide with the 0-on-invalid-denominator policy, rounding the quotient to
/// two decimal places.
///
/// A zero or missing denominator yields 0 rather than a missing marker. This
/// is deliberate: it lets aggregation proceed over heterogeneous rows with
/// no per-row branching at call sites, at the cost of silently
/// under-counting degenerate rows. Propagating missing here instead would
/// change downstream means.
pub fn safe_divide(numerator: &Value, denominator: &Value) -> f64 {
    let denominator = to_float(denominator).unwrap_or(0.0);
    if denominator <= 0.0 {
        return 0.0;
    }
    let numerator = to_float(numerator).unwrap_or(0.0);
    round2(numerator / denominator)
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean ignoring missing entries; `None` when no entry is
/// present (the mean of an empty set is undefined, not zero).
pub fn mean(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    Some(present.iter().sum::<f64>() / present.len() as f64)
}

/// Minimum ignoring missing entries.
pub fn min(values: &[Option<f64>]) -> Option<f64> {
    values.iter().flatten().copied().reduce(f64::min)
}

/// Maximum ignoring missing entries.
pub fn max(values: &[Option<f64>]) -> Option<f64> {
    values.iter().flatten().copied().reduce(f64::max)
}

/// Median ignoring missing entries; the mean of the two middle values when
/// the present count is even.
pub fn median(values: &[Option<f64>]) -> Option<f64> {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(f64::total_cmp);
    let mid = present.len() / 2;
    if present.len() % 2 == 1 {
        Some(present[mid])
    } else {
        Some((present[mid - 1] + present[mid]) / 2.0)
    }
}
