//! Benchmark for band derivation over growing table sizes
//!
//! Run with: cargo bench --bench banding_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polars::prelude::*;
use rand::prelude::*;
use rand::SeedableRng;

use churnprep::pipeline::{derive_monthly_band, derive_tenure_band, QuantileBands, MONTHLY_QUANTILES};

/// Generate synthetic tenure and monthly charge columns
fn generate_test_dataframe(n_rows: usize, seed: u64) -> DataFrame {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let tenure: Vec<i64> = (0..n_rows).map(|_| rng.gen_range(0..=72)).collect();

    // Plan prices cluster on a handful of values, like real tariffs
    let plans = [19.65, 20.05, 45.3, 70.7, 89.1, 104.8];
    let charges: Vec<f64> = (0..n_rows)
        .map(|_| {
            if rng.gen::<f64>() < 0.4 {
                *plans.choose(&mut rng).unwrap_or(&20.0)
            } else {
                18.25 + rng.gen::<f64>() * 100.5
            }
        })
        .collect();

    DataFrame::new(vec![
        Column::new("tenure".into(), tenure),
        Column::new("MonthlyCharges".into(), charges),
    ])
    .expect("Failed to create DataFrame")
}

/// Benchmark fixed vs quantile banding for varying dataset sizes
fn benchmark_band_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_derivation");

    for n_rows in [1_000, 10_000, 100_000] {
        let df = generate_test_dataframe(n_rows, 42);
        group.throughput(Throughput::Elements(n_rows as u64));

        group.bench_with_input(BenchmarkId::new("tenure", n_rows), &df, |b, df| {
            b.iter(|| {
                let mut df = df.clone();
                let _ = derive_tenure_band(black_box(&mut df));
            });
        });

        group.bench_with_input(BenchmarkId::new("monthly_quantile", n_rows), &df, |b, df| {
            b.iter(|| {
                let mut df = df.clone();
                let _ = derive_monthly_band(black_box(&mut df));
            });
        });
    }

    group.finish();
}

/// Benchmark edge computation alone for different group counts
fn benchmark_quantile_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile_edges");

    let df = generate_test_dataframe(100_000, 7);
    let values: Vec<Option<f64>> = df
        .column("MonthlyCharges")
        .and_then(|c| c.f64().map(|ca| ca.into_iter().collect()))
        .expect("MonthlyCharges should be f64");

    for groups in [MONTHLY_QUANTILES, 10, 50] {
        group.bench_with_input(BenchmarkId::new("groups", groups), &groups, |b, &groups| {
            b.iter(|| QuantileBands::from_values(black_box(&values), black_box(groups)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_band_derivation, benchmark_quantile_edges);
criterion_main!(benches);
