//! Column names and column groups the pipeline reads or derives

use polars::prelude::*;

use super::error::{PipelineError, Result};

pub const CUSTOMER_ID: &str = "customerID";
pub const CHURN: &str = "Churn";
pub const TENURE: &str = "tenure";
pub const MONTHLY_CHARGES: &str = "MonthlyCharges";
pub const TOTAL_CHARGES: &str = "TotalCharges";
pub const CONTRACT: &str = "Contract";

pub const CHURN_FLAG: &str = "ChurnFlag";
pub const TENURE_BAND: &str = "tenure_band";
pub const MONTHLY_BAND: &str = "monthly_band";
pub const CUSTOMER_VALUE: &str = "customer_value";
pub const SERVICES_COUNT: &str = "services_count";

/// Suffix for the 1/0/null columns derived from yes/no columns
pub const BIN_SUFFIX: &str = "_bin";

/// Suffix for the 1/0 service activity columns
pub const ACTIVE_SUFFIX: &str = "_active";

/// Plain yes/no columns mapped to `<col>_bin`
pub const YES_NO_COLUMNS: [&str; 4] = ["Partner", "Dependents", "PhoneService", "PaperlessBilling"];

/// Add-on services counted towards `services_count`
pub const SERVICE_COLUMNS: [&str; 7] = [
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "StreamingTV",
    "StreamingMovies",
    "MultipleLines",
];

/// Columns placed first in the exported table, in this order
pub const HEADLINE_COLUMNS: [&str; 10] = [
    CUSTOMER_ID,
    CHURN,
    CHURN_FLAG,
    TENURE,
    TENURE_BAND,
    MONTHLY_CHARGES,
    MONTHLY_BAND,
    TOTAL_CHARGES,
    CUSTOMER_VALUE,
    SERVICES_COUNT,
];

/// Every input column some stage reads
pub fn required_input_columns() -> Vec<&'static str> {
    let mut columns = vec![
        CUSTOMER_ID,
        CHURN,
        TENURE,
        MONTHLY_CHARGES,
        TOTAL_CHARGES,
        CONTRACT,
    ];
    columns.extend(YES_NO_COLUMNS);
    columns.extend(SERVICE_COLUMNS);
    columns
}

/// Every column the pipeline appends, in creation order
pub fn derived_columns() -> Vec<String> {
    let mut columns = vec![CHURN_FLAG.to_string()];
    columns.extend(YES_NO_COLUMNS.iter().map(|c| format!("{}{}", c, BIN_SUFFIX)));
    columns.push(TENURE_BAND.to_string());
    columns.push(MONTHLY_BAND.to_string());
    columns.push(CUSTOMER_VALUE.to_string());
    columns.extend(SERVICE_COLUMNS.iter().map(|c| format!("{}{}", c, ACTIVE_SUFFIX)));
    columns.push(SERVICES_COUNT.to_string());
    columns
}

/// Verify that all `columns` exist, reporting every absent name at once
pub fn require_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    let present: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: Vec<String> = columns
        .iter()
        .filter(|c| !present.iter().any(|p| p == *c))
        .map(|c| c.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::Schema { columns: missing })
    }
}
