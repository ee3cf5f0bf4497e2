use thiserror::Error;

use crate::types::ColumnName;

/// Error type for pipeline schema and configuration failures.
///
/// Cell-level problems (unparseable numbers, descriptions that yield empty
/// identity fields) are never errors; they flow through the pipeline as
/// missing/empty markers. This enum covers only boundary misuse: a table
/// that lacks a required column entirely, or a configuration value outside
/// its documented domain.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("required column '{column}' is absent from every row")]
    MissingColumn { column: ColumnName },
    #[error("configuration error: {0}")]
    Configuration(String),
}
