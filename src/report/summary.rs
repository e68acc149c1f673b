//! Run summary report generation

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of one cleaning run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub input_rows: usize,
    pub input_columns: usize,
    pub output_rows: usize,
    pub output_columns: usize,
    pub text_columns_trimmed: usize,
    pub total_charges_filled: usize,
    pub churn_rate: f64,
    pub monthly_bands: usize,
    pub derived_columns: Vec<String>,
    pub output_path: Option<PathBuf>,
    pub load_time: Duration,
    pub clean_time: Duration,
    pub feature_time: Duration,
    pub save_time: Duration,
}

impl RunSummary {
    pub fn new(input_rows: usize, input_columns: usize) -> Self {
        Self {
            input_rows,
            input_columns,
            ..Default::default()
        }
    }

    pub fn set_output(&mut self, rows: usize, columns: usize, path: PathBuf) {
        self.output_rows = rows;
        self.output_columns = columns;
        self.output_path = Some(path);
    }

    pub fn total_time(&self) -> Duration {
        self.load_time + self.clean_time + self.feature_time + self.save_time
    }

    /// Rows in equals rows out
    pub fn rows_preserved(&self) -> bool {
        self.input_rows == self.output_rows
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows (in → out)"),
            Cell::new(format!("{} → {}", self.input_rows, self.output_rows)).fg(
                if self.rows_preserved() {
                    Color::Green
                } else {
                    Color::Red
                },
            ),
        ]);

        table.add_row(vec![
            Cell::new("📐 Columns (in → out)"),
            Cell::new(format!("{} → {}", self.input_columns, self.output_columns)),
        ]);

        table.add_row(vec![
            Cell::new("✂️  Text columns trimmed"),
            Cell::new(self.text_columns_trimmed),
        ]);

        table.add_row(vec![
            Cell::new("🩹 TotalCharges filled with 0"),
            Cell::new(self.total_charges_filled).fg(if self.total_charges_filled == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("📉 Churn rate"),
            Cell::new(format!("{:.1}%", self.churn_rate * 100.0))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🪣 Monthly charge bands"),
            Cell::new(self.monthly_bands),
        ]);

        table.add_row(vec![
            Cell::new("➕ Derived columns"),
            Cell::new(self.derived_columns.len()),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Total time"),
            Cell::new(format!("{:.2}s", self.total_time().as_secs_f64())),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if let Some(path) = &self.output_path {
            println!();
            println!(
                "      {} {}",
                style("Output:").dim(),
                style(path.display()).cyan()
            );
        }
        println!(
            "      {} {}",
            style("Finished:").dim(),
            style(Local::now().format("%Y-%m-%d %H:%M:%S")).dim()
        );
    }
}
