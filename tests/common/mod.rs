//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use churnprep::pipeline::*;
use polars::prelude::*;
use tempfile::TempDir;

/// Input header in the column order of the public telco dataset
pub const TELCO_HEADER: &str = "customerID,gender,SeniorCitizen,Partner,Dependents,tenure,PhoneService,MultipleLines,InternetService,OnlineSecurity,OnlineBackup,DeviceProtection,TechSupport,StreamingTV,StreamingMovies,Contract,PaperlessBilling,PaymentMethod,MonthlyCharges,TotalCharges,Churn";

/// Number of columns in [`TELCO_HEADER`]
pub const TELCO_COLUMNS: usize = 21;

/// Hand-written rows covering the interesting cases:
/// - `0001-ABC`: brand-new customer with blank TotalCharges and no internet
/// - `0002-LNG`: tenure beyond 72 months
/// - `0003-PAD`: padded categorical values
/// - `0004-ODD`: unexpected categories in yes/no columns
pub const TELCO_ROWS: [&str; 6] = [
    "0001-ABC,Female,0,Yes,No,0,Yes,No,No,No internet service,No internet service,No internet service,No internet service,No internet service,No internet service,Two year,Yes,Mailed check,29.85, ,Yes",
    "0002-LNG,Male,1,No,No,73,Yes,Yes,Fiber optic,Yes,Yes,Yes,Yes,Yes,Yes,Two year,No,Bank transfer (automatic),100.0,7300.0,No",
    "0003-PAD,Male,0, Yes ,No,6, Yes,No phone service,DSL,Yes ,No,Yes,No,No,No,Month-to-month, No ,Electronic check,56.95,341.7, Yes ",
    "0004-ODD,Female,0,Maybe,No,12,No,No phone service,DSL,No,Yes,No,No,Yes,No,One year,,Credit card (automatic),42.3,507.6,No",
    "0005-MID,Female,0,No,Yes,24,Yes,No,Fiber optic,No,No,No,No,No,No,Month-to-month,Yes,Electronic check,70.7,1696.8,Yes",
    "0006-OLD,Male,0,Yes,Yes,48,Yes,Yes,Fiber optic,Yes,No,Yes,Yes,Yes,Yes,One year,No,Credit card (automatic),104.8,5030.4,No",
];

/// Write `header` and `rows` to `name` inside `dir`
pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", header).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    path
}

/// Temporary directory holding the hand-written telco fixture
pub fn create_telco_csv() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let rows: Vec<String> = TELCO_ROWS.iter().map(|r| r.to_string()).collect();
    let path = write_csv(temp_dir.path(), "telco.csv", TELCO_HEADER, &rows);
    (temp_dir, path)
}

/// Random but well-formed telco rows, with roughly one in ten new customers
/// carrying a blank TotalCharges
pub fn create_random_telco_rows(n: usize) -> Vec<String> {
    use rand::seq::SliceRandom;
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let yes_no = ["Yes", "No"];
    let service = ["Yes", "No", "No internet service"];
    let lines = ["Yes", "No", "No phone service"];
    let contracts = ["Month-to-month", "One year", "Two year"];

    (0..n)
        .map(|i| {
            let tenure: u32 = if rng.gen_bool(0.1) { 0 } else { rng.gen_range(1..=80) };
            let monthly: f64 = (rng.gen_range(1800..=11900) as f64) / 100.0;
            let total = if tenure == 0 {
                " ".to_string()
            } else {
                format!("{:.2}", monthly * tenure as f64)
            };
            let mut pick = |choices: &[&'static str]| *choices.choose(&mut rng).unwrap();

            format!(
                "{:04}-RND,Male,0,{},{},{},{},{},DSL,{},{},{},{},{},{},{},{},Mailed check,{},{},{}",
                i,
                pick(&yes_no),
                pick(&yes_no),
                tenure,
                pick(&yes_no),
                pick(&lines),
                pick(&service),
                pick(&service),
                pick(&service),
                pick(&service),
                pick(&service),
                pick(&service),
                pick(&contracts),
                pick(&yes_no),
                monthly,
                total,
                pick(&yes_no),
            )
        })
        .collect()
}

/// Run every transformation stage between load and export, in run order
pub fn run_all_stages(df: &mut DataFrame) -> DataFrame {
    require_columns(df, &required_input_columns()).unwrap();
    trim_text_columns(df).unwrap();
    normalize_total_charges(df).unwrap();
    derive_churn_flag(df).unwrap();
    derive_binary_columns(df).unwrap();
    derive_tenure_band(df).unwrap();
    derive_monthly_band(df).unwrap();
    derive_customer_value(df).unwrap();
    derive_services_count(df).unwrap();
    normalize_customer_id(df).unwrap();
    reorder_columns(df).unwrap()
}

/// Values of an integer column
pub fn ints(df: &DataFrame, name: &str) -> Vec<Option<i32>> {
    df.column(name).unwrap().i32().unwrap().into_iter().collect()
}

/// Values of a float column
pub fn floats(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name).unwrap().f64().unwrap().into_iter().collect()
}

/// Values of a string column
pub fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect()
}

/// Row index of a customer
pub fn row_of(df: &DataFrame, customer_id: &str) -> usize {
    strings(df, "customerID")
        .iter()
        .position(|id| id.as_deref() == Some(customer_id))
        .unwrap_or_else(|| panic!("customer {} not found", customer_id))
}

/// Column names as owned strings
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|s| s.to_string()).collect()
}
