//! Sanity-check statistics printed after feature derivation

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;
use polars::prelude::*;

use crate::pipeline::bands::{quantile_sorted, TENURE_LABELS};
use crate::pipeline::column::float_values;
use crate::pipeline::schema::{
    CHURN_FLAG, CONTRACT, CUSTOMER_VALUE, MONTHLY_CHARGES, SERVICES_COUNT, TENURE, TENURE_BAND,
    TOTAL_CHARGES,
};

/// Columns summarized by [`describe_numeric`] in the run output
pub const DESCRIBED_COLUMNS: [&str; 5] = [
    TENURE,
    MONTHLY_CHARGES,
    TOTAL_CHARGES,
    CUSTOMER_VALUE,
    SERVICES_COUNT,
];

/// Count, moments and quartiles of one numeric column (nulls excluded)
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1); NaN with fewer than two values
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl NumericSummary {
    fn from_values(column: &str, values: &[Option<f64>]) -> Self {
        let mut sorted: Vec<f64> = values.iter().flatten().copied().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let mean = if count > 0 {
            sorted.iter().sum::<f64>() / count as f64
        } else {
            f64::NAN
        };
        let std = if count > 1 {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };
        let q = |p: f64| quantile_sorted(&sorted, p).unwrap_or(f64::NAN);

        Self {
            column: column.to_string(),
            count,
            mean,
            std,
            min: q(0.0),
            q25: q(0.25),
            median: q(0.5),
            q75: q(0.75),
            max: q(1.0),
        }
    }
}

/// Summarize each named numeric column
pub fn describe_numeric(df: &DataFrame, columns: &[&str]) -> Result<Vec<NumericSummary>> {
    columns
        .iter()
        .map(|name| {
            let values = float_values(df, name)
                .with_context(|| format!("Cannot summarize column '{}'", name))?;
            Ok(NumericSummary::from_values(name, &values))
        })
        .collect()
}

/// Churn rate of one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupChurn {
    /// Group key; `None` for rows where the grouping column is null
    pub group: Option<String>,
    pub customers: usize,
    pub churn_rate: f64,
}

/// Mean `ChurnFlag` per distinct value of `group_col`, in no particular order
pub fn churn_rate_by(df: &DataFrame, group_col: &str) -> Result<Vec<GroupChurn>> {
    let grouped = df
        .clone()
        .lazy()
        .group_by([col(group_col)])
        .agg([
            col(CHURN_FLAG).cast(DataType::Float64).mean().alias("churn_rate"),
            len().alias("customers"),
        ])
        .collect()
        .with_context(|| format!("Failed to group churn by '{}'", group_col))?;

    let keys = grouped.column(group_col)?.cast(&DataType::String)?;
    let rates = grouped.column("churn_rate")?.cast(&DataType::Float64)?;
    let customers = grouped.column("customers")?.cast(&DataType::UInt64)?;

    let groups = keys
        .str()?
        .into_iter()
        .zip(rates.f64()?.into_iter())
        .zip(customers.u64()?.into_iter())
        .map(|((key, rate), n)| GroupChurn {
            group: key.map(|s| s.to_string()),
            customers: n.unwrap_or(0) as usize,
            churn_rate: rate.unwrap_or(0.0),
        })
        .collect();

    Ok(groups)
}

/// Churn rate per contract type, highest first
pub fn churn_by_contract(df: &DataFrame) -> Result<Vec<GroupChurn>> {
    let mut groups = churn_rate_by(df, CONTRACT)?;
    groups.sort_by(|a, b| {
        b.churn_rate
            .total_cmp(&a.churn_rate)
            .then_with(|| a.group.cmp(&b.group))
    });
    Ok(groups)
}

/// Churn rate per tenure band, in band order. Bands with no customers are
/// listed with a zero count.
pub fn churn_by_tenure_band(df: &DataFrame) -> Result<Vec<GroupChurn>> {
    let groups = churn_rate_by(df, TENURE_BAND)?;

    let ordered = TENURE_LABELS
        .iter()
        .map(|label| {
            groups
                .iter()
                .find(|g| g.group.as_deref() == Some(*label))
                .cloned()
                .unwrap_or_else(|| GroupChurn {
                    group: Some(label.to_string()),
                    customers: 0,
                    churn_rate: f64::NAN,
                })
        })
        .collect();

    Ok(ordered)
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{:.2}", value)
    }
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("      {}", line);
    }
}

/// Print the numeric summaries as a describe-style table
pub fn display_numeric_summaries(summaries: &[NumericSummary]) {
    println!(
        "\n    {} {}",
        style("✧").cyan(),
        style("Numeric summary").white().bold()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("Stat").add_attribute(Attribute::Bold)];
    header.extend(
        summaries
            .iter()
            .map(|s| Cell::new(&s.column).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    let rows: [(&str, fn(&NumericSummary) -> f64); 8] = [
        ("mean", |s: &NumericSummary| s.mean),
        ("std", |s: &NumericSummary| s.std),
        ("min", |s: &NumericSummary| s.min),
        ("25%", |s: &NumericSummary| s.q25),
        ("50%", |s: &NumericSummary| s.median),
        ("75%", |s: &NumericSummary| s.q75),
        ("max", |s: &NumericSummary| s.max),
        ("count", |s: &NumericSummary| s.count as f64),
    ];

    for (label, stat) in rows {
        let mut row = vec![Cell::new(label).fg(Color::Cyan)];
        row.extend(
            summaries
                .iter()
                .map(|s| Cell::new(format_stat(stat(s))).set_alignment(CellAlignment::Right)),
        );
        table.add_row(row);
    }

    print_indented(&table);
}

/// Print a group -> churn rate table
pub fn display_group_churn(title: &str, groups: &[GroupChurn]) {
    println!(
        "\n    {} {}",
        style("✧").cyan(),
        style(title).white().bold()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Customers").add_attribute(Attribute::Bold),
        Cell::new("Churn rate").add_attribute(Attribute::Bold),
    ]);

    for g in groups {
        let rate = if g.churn_rate.is_nan() {
            "-".to_string()
        } else {
            format!("{:.1}%", g.churn_rate * 100.0)
        };
        table.add_row(vec![
            Cell::new(g.group.as_deref().unwrap_or("(missing)")),
            Cell::new(g.customers).set_alignment(CellAlignment::Right),
            Cell::new(rate)
                .fg(if g.churn_rate > 0.3 { Color::Red } else { Color::Green })
                .set_alignment(CellAlignment::Right),
        ]);
    }

    print_indented(&table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_numeric_values() {
        let df = df! {
            "tenure" => [Some(1i64), Some(2), Some(3), Some(4), None],
        }
        .unwrap();

        let summary = &describe_numeric(&df, &["tenure"]).unwrap()[0];

        assert_eq!(summary.count, 4);
        assert!((summary.mean - 2.5).abs() < 1e-12);
        assert!((summary.std - 1.2909944487358056).abs() < 1e-9);
        assert_eq!(summary.min, 1.0);
        assert!((summary.q25 - 1.75).abs() < 1e-12);
        assert!((summary.median - 2.5).abs() < 1e-12);
        assert!((summary.q75 - 3.25).abs() < 1e-12);
        assert_eq!(summary.max, 4.0);
    }

    #[test]
    fn test_describe_missing_column_errors() {
        let df = df! { "a" => [1i32] }.unwrap();
        assert!(describe_numeric(&df, &["tenure"]).is_err());
    }

    #[test]
    fn test_churn_by_contract_sorted_descending() {
        let df = df! {
            "Contract" => ["Month-to-month", "Two year", "Month-to-month", "One year", "Month-to-month", "One year"],
            "ChurnFlag" => [1i32, 0, 1, 1, 0, 0],
        }
        .unwrap();

        let groups = churn_by_contract(&df).unwrap();

        let keys: Vec<&str> = groups.iter().map(|g| g.group.as_deref().unwrap()).collect();
        assert_eq!(keys, vec!["Month-to-month", "One year", "Two year"]);
        assert!((groups[0].churn_rate - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(groups[0].customers, 3);
        assert_eq!(groups[2].churn_rate, 0.0);
    }

    #[test]
    fn test_churn_by_tenure_band_in_band_order() {
        let df = df! {
            "tenure_band" => ["73+", "0", "0", "13-24"],
            "ChurnFlag" => [0i32, 1, 0, 1],
        }
        .unwrap();

        let groups = churn_by_tenure_band(&df).unwrap();

        assert_eq!(groups.len(), 7);
        assert_eq!(groups[0].group.as_deref(), Some("0"));
        assert_eq!(groups[0].customers, 2);
        assert!((groups[0].churn_rate - 0.5).abs() < 1e-12);
        assert_eq!(groups[1].customers, 0);
        assert!(groups[1].churn_rate.is_nan());
        assert_eq!(groups[3].group.as_deref(), Some("13-24"));
        assert_eq!(groups[6].customers, 1);
    }
}
