//! Error types for the cleaning and feature pipeline.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input file is missing, unreadable, or not parseable as CSV.
    #[error("Failed to load '{}': {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// One or more columns referenced by a stage are absent from the table.
    #[error("Missing required column(s): {}", columns.join(", "))]
    Schema { columns: Vec<String> },

    /// Output destination could not be created or written.
    #[error("Failed to export '{}': {reason}", path.display())]
    Export { path: PathBuf, reason: String },

    /// Unexpected failure inside the dataframe engine.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl PipelineError {
    pub fn missing_column(name: &str) -> Self {
        PipelineError::Schema {
            columns: vec![name.to_string()],
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
