//! MI / GMI evaluation benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pam_capacity::*;

fn benchmark_pam4(c: &mut Criterion) {
    let pam = PamConstellation::default();
    let s = noise_scale(pam.symbol_energy(), 10.0).unwrap();

    c.bench_function("pam4_mi", |b| {
        b.iter(|| black_box(eval_mi(pam.amplitudes(), black_box(s), pam.prior())))
    });

    c.bench_function("pam4_gmi", |b| {
        b.iter(|| black_box(eval_gmi(pam.amplitudes(), black_box(s))))
    });
}

fn benchmark_pam16(c: &mut Criterion) {
    let pam = PamConstellation::with_labeling(16, Labeling::Gray).unwrap();
    let s = noise_scale(pam.symbol_energy(), 20.0).unwrap();

    c.bench_function("pam16_mi", |b| {
        b.iter(|| black_box(eval_mi(pam.amplitudes(), black_box(s), pam.prior())))
    });

    c.bench_function("pam16_gmi", |b| {
        b.iter(|| black_box(eval_gmi(pam.amplitudes(), black_box(s))))
    });
}

fn benchmark_monte_carlo(c: &mut Criterion) {
    let pam = PamConstellation::default();
    let s = noise_scale(pam.symbol_energy(), 10.0).unwrap();
    let estimator = MonteCarloEstimator::new(10_000, 1).unwrap();

    c.bench_function("pam4_mi_monte_carlo_10k", |b| {
        b.iter(|| black_box(estimator.estimate_mi(&pam, black_box(s))))
    });
}

criterion_group!(benches, benchmark_pam4, benchmark_pam16, benchmark_monte_carlo);
criterion_main!(benches);
