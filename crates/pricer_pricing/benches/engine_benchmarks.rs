//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Benchmarks cover:
//! - RNG performance (single draws vs batch fill)
//! - Terminal price sampling, sequential and parallel (1K, 10K, 100K, 1M paths)
//! - European option pricing and the full call/put comparison

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricer_core::types::{MarketParams, OptionType};
use pricer_pricing::comparison::compare_models;
use pricer_pricing::mc::{
    generate_terminal_prices, generate_terminal_prices_parallel, GbmParams, MonteCarloConfig,
    MonteCarloPricer,
};
use pricer_pricing::rng::PricerRng;

fn reference_params() -> MarketParams {
    MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
}

/// Benchmark RNG generation (foundation for MC simulations).
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n_samples as u64));
        group.bench_with_input(
            BenchmarkId::new("normal_samples", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.gen_normal();
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark terminal price sampling, sequential vs rayon.
fn bench_terminal_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal_sampling");
    group.sample_size(30);

    let gbm = GbmParams::risk_neutral(&reference_params());

    for n_paths in [1_000, 10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n_paths as u64));
        group.bench_with_input(BenchmarkId::new("sequential", n_paths), &n_paths, |b, &n| {
            let mut rng = PricerRng::from_seed(42);
            b.iter(|| generate_terminal_prices(black_box(&gbm), n, &mut rng).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("parallel", n_paths), &n_paths, |b, &n| {
            b.iter(|| generate_terminal_prices_parallel(black_box(&gbm), n, 42).unwrap());
        });
    }

    group.finish();
}

/// Benchmark Monte Carlo pricing with varying path counts.
fn bench_mc_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_pricing");
    group.sample_size(50);

    let params = reference_params();

    for n_paths in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("european_call", n_paths),
            &n_paths,
            |b, &n| {
                let config = MonteCarloConfig::builder()
                    .n_paths(n)
                    .seed(42)
                    .build()
                    .unwrap();
                let mut pricer = MonteCarloPricer::new(config);
                b.iter(|| pricer.price_european(black_box(&params), OptionType::Call));
            },
        );
    }

    group.bench_function("compare_models_100k", |b| {
        let config = MonteCarloConfig::builder()
            .n_paths(100_000)
            .seed(42)
            .build()
            .unwrap();
        let mut pricer = MonteCarloPricer::new(config);
        b.iter(|| compare_models(black_box(&params), &mut pricer));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_terminal_sampling,
    bench_mc_pricing
);
criterion_main!(benches);
