//! Presentation order for the exported table

use polars::prelude::*;

use super::error::Result;
use super::schema::{require_columns, HEADLINE_COLUMNS};

/// Column order with the headline columns first and every other column after
/// them in its existing relative order
pub fn headline_order(columns: &[String]) -> Vec<String> {
    HEADLINE_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(
            columns
                .iter()
                .filter(|c| !HEADLINE_COLUMNS.contains(&c.as_str()))
                .cloned(),
        )
        .collect()
}

/// Move the headline columns to the front. Running it twice is a no-op.
pub fn reorder_columns(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, &HEADLINE_COLUMNS)?;

    let current: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let order = headline_order(&current);

    Ok(df.select(order.iter().map(String::as_str))?)
}
