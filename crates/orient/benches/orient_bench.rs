//! Criterion microbenches for the orientation pass (group "orient").
//!
//! Uses deterministic jittered-grid models so runs are stable across
//! machines and reruns.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use orient::api::*;

fn grid(nx: usize, ny: usize) -> Model {
    draw_grid_model(
        GridCfg {
            nx,
            ny,
            ..GridCfg::default()
        },
        ReplayToken {
            seed: 2026,
            index: 0,
        },
    )
}

fn bench_build_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("orient");
    let model = grid(40, 40);
    group.throughput(Throughput::Elements(model.bars().len() as u64));
    group.bench_function("build_graph_40x40", |b| {
        b.iter(|| build_graph(&model, GeomCfg::default()).unwrap())
    });
    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("orient");
    let model = grid(40, 40);
    group.throughput(Throughput::Elements(model.bars().len() as u64));
    group.bench_function("orient_model_40x40", |b| {
        b.iter(|| orient_model(&model, &[], GeomCfg::default()).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_build_graph, bench_full_pass);
criterion_main!(benches);
