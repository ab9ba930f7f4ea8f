//! Throughput of correlated increment generation.

use cbm_math::{cholesky_decomposition, seeded_rng, Matrix};
use cbm_methods::monte_carlo::{CorrelatedGenerator, TimeGrid};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_increments(c: &mut Criterion) {
    let mut group = c.benchmark_group("increments_rho_0.7");
    for steps in [1_000usize, 10_000, 100_000] {
        let grid = TimeGrid::new(1.0, steps).unwrap();
        let generator = CorrelatedGenerator::new(0.7.into(), grid).unwrap();
        group.throughput(Throughput::Elements((2 * steps) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &generator, |b, g| {
            let mut rng = seeded_rng(42);
            b.iter(|| g.increments(&mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_cholesky(c: &mut Criterion) {
    let mut group = c.benchmark_group("cholesky");
    for n in [2usize, 8, 32] {
        // Exponentially decaying correlation, positive-definite for any n.
        let sigma = Matrix::from_fn(n, n, |i, j| 0.9f64.powi((i as i32 - j as i32).abs()));
        group.bench_with_input(BenchmarkId::from_parameter(n), &sigma, |b, m| {
            b.iter(|| cholesky_decomposition(black_box(m)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_increments, bench_cholesky);
criterion_main!(benches);
