//! Criterion benchmarks for the reference triangulators on random star polygons.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trivalid::prelude::*;

fn bench_triangulators(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");
    for &n in &[16usize, 128, 1024, 4096] {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let poly = draw_star_polygon(cfg, ReplayToken { seed: 17, index: 0 }).unwrap();
        for t in all_triangulators() {
            group.bench_with_input(BenchmarkId::new(t.name(), n), &n, |b, _| {
                b.iter(|| t.triangulate(poly.view()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_triangulators);
criterion_main!(benches);
