//! Benchmarks for the 2D and 3D curve mappings.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hilbertmap::{AxisOrder, Curve2D, Curve3D};

/// Benchmark `Curve2D::distance` at the orders used by each block count.
fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve2d_distance");

    for order in [3, 6, 9, 12] {
        let curve = Curve2D::new(order, AxisOrder::identity()).expect("valid curve");
        let mid = curve.side() / 2;
        group.bench_function(BenchmarkId::from_parameter(order), |b| {
            b.iter(|| curve.distance(black_box(mid), black_box(mid - 1)))
        });
    }

    group.finish();
}

/// Benchmark `Curve3D::point_from_distance` up to the full colour cube.
fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve3d_point");

    for order in [2, 4, 6, 8] {
        let curve = Curve3D::new(order, AxisOrder::identity()).expect("valid curve");
        let mid = u64::from(curve.length() / 2);
        group.bench_function(BenchmarkId::from_parameter(order), |b| {
            b.iter(|| curve.point_from_distance(black_box(mid)))
        });
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_distance, bench_point);
}

pub use bench_defs::benches;
criterion_main!(benches);
