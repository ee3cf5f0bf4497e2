#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Pipeline configuration types.
pub mod config;
/// Centralized vocabularies, column names, and defaults.
pub mod constants;
/// Processor identity extraction from normalized descriptions.
pub mod identity;
/// Text normalization for processor descriptions.
pub mod normalize;
/// Numeric sanitization and missing-aware reducers.
pub mod numeric;
/// In-memory pipeline orchestration.
pub mod pipeline;
/// Machine-series expansion helpers.
pub mod series;
/// Power and ratio aggregation.
pub mod stats;
/// Named-column rows, identity keying, and joins.
pub mod table;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::PipelineConfig;
pub use errors::PipelineError;
pub use identity::{extract, ProcessorIdentity};
pub use normalize::normalize;
pub use pipeline::{family_power_report, series_power_index, SeriesPower};
pub use series::{clean_series_label, expand, SeriesFamilyRow};
pub use stats::{blended_power, summarize, FamilySummary};
pub use table::{assign_identity_columns, inner_join, join_key, Row, Value};
pub use types::{ColumnName, Description, FamilyLabel, IdentityValue, SeriesLabel};
