//! Churnprep: Telco Churn Cleaning CLI Tool
//!
//! Reads the telco customer churn CSV, cleans it, derives features and
//! writes a BI-ready CSV.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use churnprep::cli::Cli;
use churnprep::pipeline::{
    dataset_stats, derive_binary_columns, derive_churn_flag, derive_customer_value,
    derive_monthly_band, derive_services_count, derive_tenure_band, derived_columns,
    load_dataset, normalize_customer_id, normalize_total_charges, reorder_columns,
    require_columns, required_input_columns, save_dataset, trim_text_columns,
};
use churnprep::report::{
    churn_by_contract, churn_by_tenure_band, describe_numeric, display_group_churn,
    display_numeric_summaries, RunSummary, DESCRIBED_COLUMNS,
};
use churnprep::utils::{
    create_spinner, finish_with_failure, finish_with_success, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &cli.output);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading CSV...");
    let mut df = load_dataset(&cli.input, cli.infer_schema_length)
        .inspect_err(|_| finish_with_failure(&spinner, "Load failed"))?;
    finish_with_success(&spinner, &format!("Loaded {}", cli.input.display()));

    let (rows, cols, memory_mb) = dataset_stats(&df);
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    if cli.preview_rows > 0 {
        println!("\n    {} Preview:", style("✧").cyan());
        println!("{}", df.head(Some(cli.preview_rows)));
    }

    require_columns(&df, &required_input_columns())?;
    print_success("All required columns present");

    let mut summary = RunSummary::new(rows, cols);
    summary.load_time = step_start.elapsed();
    print_step_time(summary.load_time);

    // Step 2: Clean text and TotalCharges
    print_step_header(2, "Clean Fields");

    let step_start = Instant::now();
    summary.text_columns_trimmed =
        trim_text_columns(&mut df).context("Failed to trim text columns")?;
    print_success(&format!(
        "Trimmed whitespace in {} text column(s)",
        summary.text_columns_trimmed
    ));

    summary.total_charges_filled =
        normalize_total_charges(&mut df).context("Failed to normalize TotalCharges")?;
    if summary.total_charges_filled == 0 {
        print_info("TotalCharges is fully numeric");
    } else {
        print_count(
            "unparseable TotalCharges value(s)",
            summary.total_charges_filled,
            Some("(set to 0.0, expected for tenure 0)"),
        );
    }
    print_success("TotalCharges converted to numeric");

    summary.clean_time = step_start.elapsed();
    print_step_time(summary.clean_time);

    // Step 3: Flags, bands and aggregates
    print_step_header(3, "Derive Features");

    let step_start = Instant::now();
    summary.churn_rate = derive_churn_flag(&mut df)?;
    println!(
        "      Churn rate (mean ChurnFlag): {}",
        style(format!("{:.4}", summary.churn_rate)).yellow().bold()
    );

    let bins = derive_binary_columns(&mut df)?;
    print_success(&format!("Derived {} yes/no binary column(s)", bins.len()));

    derive_tenure_band(&mut df)?;
    let monthly = derive_monthly_band(&mut df)?;
    summary.monthly_bands = monthly.len();
    if monthly.len() < churnprep::pipeline::MONTHLY_QUANTILES {
        print_info(&format!(
            "MonthlyCharges quantiles collapsed to {} band(s)",
            monthly.len()
        ));
    }
    print_success("Derived tenure and monthly charge bands");

    derive_customer_value(&mut df)?;
    derive_services_count(&mut df)?;
    print_success("Derived customer value and services count");

    summary.derived_columns = derived_columns();

    // Sanity checks
    let numeric = describe_numeric(&df, &DESCRIBED_COLUMNS)?;
    display_numeric_summaries(&numeric);
    display_group_churn("Churn by Contract", &churn_by_contract(&df)?);
    display_group_churn("Churn by tenure_band", &churn_by_tenure_band(&df)?);

    summary.feature_time = step_start.elapsed();
    print_step_time(summary.feature_time);

    // Step 4: Reorder and save
    print_step_header(4, "Export");

    let step_start = Instant::now();
    normalize_customer_id(&mut df)?;
    let mut df = reorder_columns(&df)?;

    let spinner = create_spinner("Writing output file...");
    save_dataset(&mut df, &cli.output)
        .inspect_err(|_| finish_with_failure(&spinner, "Export failed"))?;
    finish_with_success(&spinner, &format!("Saved to {}", cli.output.display()));

    let (out_rows, out_cols, _) = dataset_stats(&df);
    summary.set_output(out_rows, out_cols, cli.output.clone());
    summary.save_time = step_start.elapsed();
    print_step_time(summary.save_time);

    summary.display();

    print_completion(&cli.output);

    Ok(())
}
