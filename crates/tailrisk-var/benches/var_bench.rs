//! Benchmarks for the two VaR estimation methods.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tailrisk_core::{ConfidenceLevel, ReturnSeries};
use tailrisk_var::{historical_var, parametric_var};

fn synthetic_returns(n: usize) -> ReturnSeries {
    // Deterministic pseudo-returns; no RNG needed for throughput numbers.
    let returns = (0..n)
        .map(|i| ((i as f64 * 12.9898).sin() * 43758.5453).fract() * 0.04 - 0.02)
        .collect();
    ReturnSeries::new(returns).expect("synthetic returns are finite")
}

fn bench_var_methods(c: &mut Criterion) {
    let returns = synthetic_returns(2_520); // ten years of trading days

    c.bench_function("parametric_var_2520", |b| {
        b.iter(|| parametric_var(black_box(&returns), ConfidenceLevel::P95).unwrap());
    });

    c.bench_function("historical_var_2520", |b| {
        b.iter(|| historical_var(black_box(&returns), ConfidenceLevel::P95).unwrap());
    });
}

criterion_group!(benches, bench_var_methods);
criterion_main!(benches);
