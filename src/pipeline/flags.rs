//! Churn target flag and yes/no binary columns

use polars::prelude::*;

use super::column::{map_strings, put_int_column};
use super::error::Result;
use super::schema::{BIN_SUFFIX, CHURN, CHURN_FLAG, YES_NO_COLUMNS};

/// 1 for exactly "Yes", 0 for everything else including null
pub fn churn_flag(value: Option<&str>) -> i32 {
    match value {
        Some("Yes") => 1,
        _ => 0,
    }
}

/// 1 for "Yes", 0 for "No", null for anything else
pub fn yes_no_bin(value: Option<&str>) -> Option<i32> {
    match value {
        Some("Yes") => Some(1),
        Some("No") => Some(0),
        _ => None,
    }
}

/// Add `ChurnFlag` and return the churn rate (mean of the flag, 0.0 for an empty table)
pub fn derive_churn_flag(df: &mut DataFrame) -> Result<f64> {
    let flags = map_strings(df, CHURN, churn_flag)?;

    let churn_rate = if flags.is_empty() {
        0.0
    } else {
        flags.iter().map(|&f| f as f64).sum::<f64>() / flags.len() as f64
    };

    put_int_column(df, CHURN_FLAG, flags.into_iter().map(Some).collect())?;
    Ok(churn_rate)
}

/// Add `<col>_bin` for every yes/no column. Returns the derived column names.
pub fn derive_binary_columns(df: &mut DataFrame) -> Result<Vec<String>> {
    let mut derived = Vec::with_capacity(YES_NO_COLUMNS.len());

    for source in YES_NO_COLUMNS {
        let name = format!("{}{}", source, BIN_SUFFIX);
        let values = map_strings(df, source, yes_no_bin)?;
        put_int_column(df, &name, values)?;
        derived.push(name);
    }

    Ok(derived)
}
