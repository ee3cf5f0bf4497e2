//! Named-column rows, identity keying, and relational joins.
//!
//! Tables are ordered collections of [`Row`]s; a row is an insertion-ordered
//! map from column name to [`Value`]. Unknown columns are never interpreted:
//! keying appends identity columns next to whatever was already there, and
//! joins carry every non-key column through untouched.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::columns;
use crate::identity::ProcessorIdentity;
use crate::types::ColumnName;

/// A single cell in a named-column row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Free-form text cell.
    Text(String),
    /// Finite numeric cell.
    Number(f64),
    /// Absent or unparseable cell.
    Missing,
}

impl Value {
    /// Text content, if this cell is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric content, if this cell is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

/// One named-column row. Column order is preserved.
pub type Row = IndexMap<ColumnName, Value>;

/// Parse every row's description and attach the six identity columns
/// (company plus the five join-key fields).
///
/// A row whose description cell is missing or non-text keys as all-empty
/// identity fields; it may still join against other all-empty keys, which is
/// intentional permissiveness inherited from the key design.
pub fn assign_identity_columns(rows: &[Row], description_column: &str) -> Vec<Row> {
    rows.iter()
        .map(|row| {
            let description = row
                .get(description_column)
                .and_then(Value::as_text)
                .unwrap_or("");
            let identity = ProcessorIdentity::parse(description);
            let mut keyed = row.clone();
            keyed.insert(columns::COMPANY.to_string(), Value::Text(identity.company));
            keyed.insert(columns::BRAND.to_string(), Value::Text(identity.brand));
            keyed.insert(columns::MAKE.to_string(), Value::Text(identity.make));
            keyed.insert(columns::MODEL.to_string(), Value::Text(identity.model));
            keyed.insert(columns::MONIKER.to_string(), Value::Text(identity.moniker));
            keyed.insert(columns::VERSION.to_string(), Value::Text(identity.version));
            keyed
        })
        .collect()
}

/// The join-key tuple of a keyed row. Non-text and absent key cells read as
/// empty, so rows that never went through the key assigner still key
/// deterministically.
pub fn join_key(row: &Row) -> [String; 5] {
    columns::KEY_FIELDS.map(|field| {
        row.get(field)
            .and_then(Value::as_text)
            .unwrap_or("")
            .to_string()
    })
}

/// Relational inner join on the identity 5-tuple.
///
/// Output order is deterministic: left rows in order, and within one left
/// row its right matches in order. All-empty keys match each other (many
/// low-end processors genuinely have no make, moniker, or version). Columns
/// from both sides are retained; a right-side non-key column whose name
/// collides with a left-side column is suffixed with
/// [`columns::JOIN_RIGHT_SUFFIX`].
pub fn inner_join(left: &[Row], right: &[Row]) -> Vec<Row> {
    let mut right_by_key: HashMap<[String; 5], Vec<usize>> = HashMap::new();
    for (idx, row) in right.iter().enumerate() {
        right_by_key.entry(join_key(row)).or_default().push(idx);
    }

    let mut joined = Vec::new();
    for left_row in left {
        let Some(matches) = right_by_key.get(&join_key(left_row)) else {
            continue;
        };
        for &right_idx in matches {
            let mut merged = left_row.clone();
            for (name, value) in &right[right_idx] {
                if columns::KEY_FIELDS.contains(&name.as_str()) {
                    continue;
                }
                if merged.contains_key(name) {
                    merged.insert(format!("{name}{}", columns::JOIN_RIGHT_SUFFIX), value.clone());
                } else {
                    merged.insert(name.clone(), value.clone());
                }
            }
            joined.push(merged);
        }
    }
    joined
}
