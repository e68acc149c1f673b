//! Elementwise column access
//!
//! Stages pull a column out as `Vec<Option<T>>`, transform it row by row in
//! plain Rust, and write the result back as a new column. Nulls stay explicit
//! as `None` the whole way through.

use polars::prelude::*;

use super::error::{PipelineError, Result};

/// Look up a column, turning an absent name into a schema error
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| PipelineError::missing_column(name))
}

/// Values of a column as strings, casting non-string columns first
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let col = require_column(df, name)?;

    let values = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        _ => {
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(values)
}

/// Values of a numeric column as f64
pub fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let col = require_column(df, name)?;
    let cast = col.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().collect())
}

/// Apply `f` to every value of a column viewed as text
pub fn map_strings<T, F>(df: &DataFrame, name: &str, f: F) -> Result<Vec<T>>
where
    F: Fn(Option<&str>) -> T,
{
    Ok(string_values(df, name)?
        .iter()
        .map(|v| f(v.as_deref()))
        .collect())
}

/// Add `values` as column `name`, replacing an existing column in place
pub fn put_int_column(df: &mut DataFrame, name: &str, values: Vec<Option<i32>>) -> Result<()> {
    df.with_column(Column::new(name.into(), values))?;
    Ok(())
}

/// Same as [`put_int_column`] for float columns
pub fn put_float_column(df: &mut DataFrame, name: &str, values: Vec<Option<f64>>) -> Result<()> {
    df.with_column(Column::new(name.into(), values))?;
    Ok(())
}

/// Same as [`put_int_column`] for text columns
pub fn put_string_column(df: &mut DataFrame, name: &str, values: Vec<Option<String>>) -> Result<()> {
    df.with_column(Column::new(name.into(), values))?;
    Ok(())
}
