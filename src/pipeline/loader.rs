//! Dataset loading and export for CSV files

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use super::error::{PipelineError, Result};

/// Load a CSV dataset with a header row.
///
/// `infer_schema_length` is the number of rows used to infer column types;
/// 0 scans the whole file, so a blank `TotalCharges` anywhere keeps that
/// column textual instead of failing a numeric parse.
///
/// Any failure (missing file, unreadable file, malformed rows) is reported as
/// a single [`PipelineError::Load`]; no partial table is returned.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(PipelineError::Load {
            path: path.to_path_buf(),
            reason: "file does not exist or is not a regular file".to_string(),
        });
    }

    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let load_error = |e: PolarsError| PipelineError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(schema_length)
        .finish()
        .map_err(load_error)?
        .collect()
        .map_err(load_error)
}

/// Row count, column count, and estimated size in MB of a loaded dataset
pub fn dataset_stats(df: &DataFrame) -> (usize, usize, f64) {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    (rows, cols, memory_mb)
}

/// Write the dataset as CSV with a header row and no index column.
/// Nulls are written as empty fields.
pub fn save_dataset(df: &mut DataFrame, path: &Path) -> Result<()> {
    let export_error = |reason: String| PipelineError::Export {
        path: path.to_path_buf(),
        reason,
    };

    let mut file = File::create(path).map_err(|e| export_error(e.to_string()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| export_error(e.to_string()))?;

    Ok(())
}
