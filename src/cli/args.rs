//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Input file read when no `--input` is given, relative to the working directory
pub const DEFAULT_INPUT: &str = "WA_Fn-UseC_-Telco-Customer-Churn.csv";

/// Output file written when no `--output` is given, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "telco_cleaned_for_powerbi.csv";

/// Churnprep - Clean the telco churn dataset and derive BI-ready features.
///
/// With no arguments, reads the telco CSV from the working directory and
/// writes the cleaned table next to it.
#[derive(Parser, Debug)]
#[command(name = "churnprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file path
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output CSV file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of rows to use for schema inference.
    /// Use 0 for a full table scan (default), which keeps a column with any
    /// blank value textual instead of failing a numeric parse.
    #[arg(long, default_value = "0")]
    pub infer_schema_length: usize,

    /// Number of rows shown in the dataset preview after loading (0 disables it)
    #[arg(long, default_value = "5")]
    pub preview_rows: usize,
}
