//! Benchmarks for the samplers and pricers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gbm_mc_rs::{GbmParams, Seed};

fn params() -> GbmParams {
    GbmParams::new(100.0, 0.05, 0.2, 1.0)
}

fn benchmark_gbm_step(c: &mut Criterion) {
    use gbm_mc_rs::GbmStep;

    let step = GbmStep::new(&params(), 1.0 / 252.0);
    let mut rng = Seed::Seeded(42).rng();

    c.bench_function("gbm_step", |bench| {
        bench.iter(|| step.sample(black_box(100.0), &mut rng))
    });
}

fn benchmark_samplers(c: &mut Criterion) {
    use gbm_mc_rs::{path_sample, terminal_sample};

    let params = params();
    let mut rng = Seed::Seeded(42).rng();

    c.bench_function("terminal_sample_10k", |bench| {
        bench.iter(|| black_box(terminal_sample(&params, 10_000, &mut rng)))
    });

    c.bench_function("path_sample_1k_x_50", |bench| {
        bench.iter(|| black_box(path_sample(&params, 50, 1_000, &mut rng)))
    });
}

fn benchmark_pricers(c: &mut Criterion) {
    use gbm_mc_rs::{path_sample, price_asian_call, price_european_call};

    let params = params();
    let mut rng = Seed::Seeded(42).rng();

    c.bench_function("european_call_10k", |bench| {
        bench.iter(|| price_european_call(&params, black_box(100.0), 10_000, &mut rng))
    });

    let paths = path_sample(&params, 50, 1_000, &mut rng).unwrap();
    c.bench_function("asian_call_1k_x_50", |bench| {
        bench.iter(|| price_asian_call(&paths, black_box(100.0), 0.05, 1.0))
    });
}

criterion_group!(
    benches,
    benchmark_gbm_step,
    benchmark_samplers,
    benchmark_pricers,
);

criterion_main!(benches);
