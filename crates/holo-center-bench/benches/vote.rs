use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use holo_center_bench::synthetic_rings;
use holo_center_core::{compute_gradient, find_center, vote, CenterFindParams};

fn bench_vote(c: &mut Criterion) {
    let mut group = c.benchmark_group("vote");
    for n in [128usize, 256, 512] {
        let img = synthetic_rings(n, (n as f32 / 2.0, n as f32 / 2.0), 1.5);
        let grad = compute_gradient(&img.view()).expect("gradient");
        group.bench_function(format!("rings_{n}"), |b| {
            b.iter(|| vote(black_box(&grad), black_box(0.5)).expect("vote"))
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let img = synthetic_rings(256, (128.0, 128.0), 1.5);
    let params = CenterFindParams::default();
    c.bench_function("find_center_256", |b| {
        b.iter(|| find_center(black_box(&img.view()), black_box(&params)).expect("find_center"))
    });
}

criterion_group!(benches, bench_vote, bench_pipeline);
criterion_main!(benches);
