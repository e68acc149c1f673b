//! Banding of continuous columns
//!
//! Two strategies are used:
//!
//! - **Fixed**: `tenure` is cut at hand-picked month boundaries.
//! - **Quantile**: `MonthlyCharges` is cut at data-derived quintiles so each
//!   band holds roughly the same number of customers.
//!
//! Both are right-inclusive: a value equal to an upper edge belongs to the
//! band that edge closes.

use polars::prelude::*;

use super::column::{float_values, put_string_column};
use super::error::Result;
use super::schema::{MONTHLY_BAND, MONTHLY_CHARGES, TENURE, TENURE_BAND};

/// Upper edges of the tenure bands. The lower edge of the first band is -1
/// (exclusive) and the last band is unbounded above.
const TENURE_UPPER_EDGES: [f64; 6] = [0.0, 6.0, 12.0, 24.0, 48.0, 72.0];

/// Exclusive lower bound of the first tenure band
const TENURE_LOWER_BOUND: f64 = -1.0;

/// Labels for the tenure bands, in band order
pub const TENURE_LABELS: [&str; 7] = ["0", "1-6", "7-12", "13-24", "25-48", "49-72", "73+"];

/// Number of quantile groups for `MonthlyCharges`
pub const MONTHLY_QUANTILES: usize = 5;

/// Starting precision (fractional digits) for quantile band labels
const LABEL_PRECISION: i32 = 3;

/// Highest precision tried when making quantile labels distinct
const MAX_LABEL_PRECISION: i32 = 20;

/// Tenure band label for a value, `None` for null or tenure <= -1
pub fn tenure_band(tenure: Option<f64>) -> Option<&'static str> {
    let t = tenure?;
    if t.is_nan() || t <= TENURE_LOWER_BOUND {
        return None;
    }
    let idx = TENURE_UPPER_EDGES.partition_point(|&edge| edge < t);
    Some(TENURE_LABELS[idx])
}

/// Add `tenure_band`
pub fn derive_tenure_band(df: &mut DataFrame) -> Result<()> {
    let bands: Vec<Option<String>> = float_values(df, TENURE)?
        .into_iter()
        .map(|t| tenure_band(t).map(str::to_string))
        .collect();
    put_string_column(df, TENURE_BAND, bands)
}

/// Linear-interpolated quantile of already sorted values.
///
/// Matches numpy's default ("linear") method: the quantile sits at position
/// `q * (n - 1)` between order statistics.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Quantile band edges and their labels
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileBands {
    /// Strictly increasing cut points, `labels.len() + 1` of them when non-empty
    pub edges: Vec<f64>,
    pub labels: Vec<String>,
}

impl QuantileBands {
    /// Compute `groups` equal-population bands over the non-null values.
    ///
    /// Repeated cut points are collapsed, so heavily tied data produces fewer
    /// than `groups` bands. A column with a single distinct value gets one
    /// band; a column with no values gets none.
    pub fn from_values(values: &[Option<f64>], groups: usize) -> Self {
        let mut sorted: Vec<f64> = values
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        if sorted.is_empty() || groups == 0 {
            return Self {
                edges: Vec::new(),
                labels: Vec::new(),
            };
        }

        let mut edges: Vec<f64> = (0..=groups)
            .filter_map(|i| quantile_sorted(&sorted, i as f64 / groups as f64))
            .collect();
        edges.dedup();

        if edges.len() == 1 {
            let v = edges[0];
            let widen = if v != 0.0 { 0.001 * v.abs() } else { 0.001 };
            edges.insert(0, v - widen);
        }

        let labels = format_interval_labels(&edges);
        Self { edges, labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Band index for a value; the lowest edge is inclusive
    pub fn assign(&self, value: f64) -> Option<usize> {
        let first = *self.edges.first()?;
        let last = *self.edges.last()?;
        if value.is_nan() || value < first || value > last {
            return None;
        }
        let idx = self.edges[1..].partition_point(|&edge| edge < value);
        Some(idx.min(self.len() - 1))
    }

    /// Band label for a value
    pub fn label(&self, value: Option<f64>) -> Option<&str> {
        let idx = self.assign(value?)?;
        Some(self.labels[idx].as_str())
    }
}

/// Round to `precision` significant fractional digits, counting from the
/// first non-zero fractional digit when the integer part is zero.
fn round_frac(x: f64, precision: i32) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let whole = x.trunc();
    let frac = x - whole;
    let digits = if whole == 0.0 {
        -(frac.abs().log10().floor() as i32) - 1 + precision
    } else {
        precision
    };
    let scale = 10f64.powi(digits);
    (x * scale).round() / scale
}

/// Smallest precision (from [`LABEL_PRECISION`]) at which rounded edges stay distinct
fn label_precision(edges: &[f64]) -> i32 {
    for precision in LABEL_PRECISION..MAX_LABEL_PRECISION {
        let rounded: Vec<f64> = edges.iter().map(|&e| round_frac(e, precision)).collect();
        if rounded.windows(2).all(|w| w[0] != w[1]) {
            return precision;
        }
    }
    MAX_LABEL_PRECISION
}

/// `"(lo, hi]"` labels with the first lower edge nudged down so the minimum
/// value visibly falls inside the first band
fn format_interval_labels(edges: &[f64]) -> Vec<String> {
    let precision = label_precision(edges);
    let mut rounded: Vec<f64> = edges.iter().map(|&e| round_frac(e, precision)).collect();
    if let Some(first) = rounded.first_mut() {
        *first -= 10f64.powi(-precision);
    }
    rounded
        .windows(2)
        .map(|w| format!("({:?}, {:?}]", w[0], w[1]))
        .collect()
}

/// Add `monthly_band` from `MonthlyCharges` quintiles and return the bands used
pub fn derive_monthly_band(df: &mut DataFrame) -> Result<QuantileBands> {
    let charges = float_values(df, MONTHLY_CHARGES)?;
    let bands = QuantileBands::from_values(&charges, MONTHLY_QUANTILES);

    let labels: Vec<Option<String>> = charges
        .iter()
        .map(|&c| bands.label(c).map(str::to_string))
        .collect();
    put_string_column(df, MONTHLY_BAND, labels)?;

    Ok(bands)
}
