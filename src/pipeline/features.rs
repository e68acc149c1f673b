//! Aggregate features: customer value and active service count

use polars::prelude::*;

use super::column::{float_values, map_strings, put_float_column, put_int_column};
use super::error::Result;
use super::schema::{ACTIVE_SUFFIX, CUSTOMER_VALUE, MONTHLY_CHARGES, SERVICES_COUNT, SERVICE_COLUMNS, TENURE};

/// 1 only for an exact "Yes"; "No" and "No internet service" both count as inactive
pub fn service_active(value: Option<&str>) -> i32 {
    match value {
        Some("Yes") => 1,
        _ => 0,
    }
}

/// Add `customer_value = tenure * MonthlyCharges`.
///
/// Both operands are numeric after load, so the product is only null when an
/// operand cell itself was empty.
pub fn derive_customer_value(df: &mut DataFrame) -> Result<()> {
    let tenure = float_values(df, TENURE)?;
    let charges = float_values(df, MONTHLY_CHARGES)?;

    let value: Vec<Option<f64>> = tenure
        .iter()
        .zip(charges.iter())
        .map(|(t, c)| Some((*t)? * (*c)?))
        .collect();

    put_float_column(df, CUSTOMER_VALUE, value)
}

/// Add `<service>_active` for each service column and their per-row sum
/// `services_count`
pub fn derive_services_count(df: &mut DataFrame) -> Result<()> {
    let mut counts = vec![0i32; df.height()];

    for service in SERVICE_COLUMNS {
        let active = map_strings(df, service, service_active)?;
        for (count, flag) in counts.iter_mut().zip(active.iter()) {
            *count += flag;
        }
        put_int_column(
            df,
            &format!("{}{}", service, ACTIVE_SUFFIX),
            active.into_iter().map(Some).collect(),
        )?;
    }

    put_int_column(df, SERVICES_COUNT, counts.into_iter().map(Some).collect())
}
