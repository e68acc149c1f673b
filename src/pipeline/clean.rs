//! Text cleanup and type normalization

use polars::prelude::*;

use super::column::{put_float_column, put_string_column, require_column, string_values};
use super::error::Result;
use super::schema::{CUSTOMER_ID, TOTAL_CHARGES};

/// Strip leading/trailing whitespace from every value of every string column.
///
/// Numeric columns are left untouched. Returns the number of columns trimmed.
pub fn trim_text_columns(df: &mut DataFrame) -> Result<usize> {
    let text_columns: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|c| c.dtype() == &DataType::String)
        .map(|c| c.name().to_string())
        .collect();

    for name in &text_columns {
        let trimmed: Vec<Option<String>> = string_values(df, name)?
            .into_iter()
            .map(|v| v.map(|s| s.trim().to_string()))
            .collect();
        put_string_column(df, name, trimmed)?;
    }

    Ok(text_columns.len())
}

/// Parse one `TotalCharges` cell. Blank, unparseable, and non-finite text is missing.
fn parse_charge(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Coerce `TotalCharges` to f64, replacing missing values with 0.0.
///
/// Missing values correspond to customers with `tenure == 0`, for whom a zero
/// lifetime charge is correct. This is assumed, not checked against `tenure`.
/// Returns how many values were missing before the fill.
pub fn normalize_total_charges(df: &mut DataFrame) -> Result<usize> {
    let col = require_column(df, TOTAL_CHARGES)?;

    let parsed: Vec<Option<f64>> = if col.dtype().is_primitive_numeric() {
        let cast = col.cast(&DataType::Float64)?;
        cast.f64()?
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect()
    } else {
        string_values(df, TOTAL_CHARGES)?
            .iter()
            .map(|v| v.as_deref().and_then(parse_charge))
            .collect()
    };

    let missing = parsed.iter().filter(|v| v.is_none()).count();
    let filled: Vec<Option<f64>> = parsed.into_iter().map(|v| Some(v.unwrap_or(0.0))).collect();
    put_float_column(df, TOTAL_CHARGES, filled)?;

    Ok(missing)
}

/// Cast `customerID` to a string column regardless of its inferred type
pub fn normalize_customer_id(df: &mut DataFrame) -> Result<()> {
    let col = require_column(df, CUSTOMER_ID)?;
    if col.dtype() != &DataType::String {
        let cast = col.cast(&DataType::String)?;
        df.with_column(cast)?;
    }
    Ok(())
}
