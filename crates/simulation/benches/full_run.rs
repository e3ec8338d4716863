//! Benchmarks for a full one-year simulation run

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokensim::{run, Preset, SimulationParameters};

fn bench_static_year(c: &mut Criterion) {
    let params = SimulationParameters::default();
    c.bench_function("run_static_year", |b| {
        b.iter(|| run(black_box(&params)))
    });
}

fn bench_dynamic_year(c: &mut Criterion) {
    let params = Preset::Conservative.parameters();
    c.bench_function("run_dynamic_year", |b| {
        b.iter(|| run(black_box(&params)))
    });
}

criterion_group!(benches, bench_static_year, bench_dynamic_year);
criterion_main!(benches);
