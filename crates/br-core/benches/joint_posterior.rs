//! Criterion benchmarks for marginal and joint-posterior computation in `br-core`.
//!
//! Uses synthetic configurations so the cost can be compared across
//! hypothesis counts and selection sizes.

use br_config::{Configuration, Fact, Hypothesis};
use br_core::inference::{compute_joint_posterior, compute_marginals, compute_single_posteriors};
use br_math::Precision;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic(hypotheses: usize, facts: usize) -> Configuration {
    let prior = 1.0 / hypotheses as f64;
    let hs = (0..hypotheses)
        .map(|i| Hypothesis::new(format!("h{}", i), prior))
        .collect();
    let fs = (0..facts)
        .map(|f| {
            let likelihoods = (0..hypotheses)
                .map(|h| ((f * 7 + h * 13) % 97) as f64 / 97.0 + 0.005)
                .collect();
            Fact::new(format!("f{}", f), likelihoods)
        })
        .collect();
    Configuration::new(hs, fs).expect("synthetic configuration is valid")
}

fn bench_marginals(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference/marginals");
    for hypotheses in [4usize, 32, 256] {
        let config = synthetic(hypotheses, 64);
        group.bench_with_input(BenchmarkId::from_parameter(hypotheses), &config, |b, cfg| {
            b.iter(|| {
                let m = compute_marginals(black_box(cfg)).unwrap();
                black_box(compute_single_posteriors(cfg, &m).unwrap());
            })
        });
    }
    group.finish();
}

fn bench_joint(c: &mut Criterion) {
    let config = synthetic(32, 64);
    let mut group = c.benchmark_group("inference/joint_posterior");
    for k in [1usize, 8, 64] {
        let indices: Vec<usize> = (0..k).collect();
        group.bench_with_input(BenchmarkId::new("facts", k), &indices, |b, idx| {
            b.iter(|| {
                black_box(
                    compute_joint_posterior(black_box(&config), idx, Precision::DEFAULT).unwrap(),
                );
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_marginals, bench_joint);
criterion_main!(benches);
