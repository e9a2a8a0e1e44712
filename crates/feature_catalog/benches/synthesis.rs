mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use feature_catalog::synthesis::{FeatureSynthesis, GridSynthesis};

const GRID_SIDES: [usize; 5] = [10, 32, 100, 320, 1000];

fn synthesis_grid_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis/grid");

    for &side in &GRID_SIDES {
        let grid = GridSynthesis::new(side, side);
        group.throughput(common::elements_throughput(grid.len()));

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let records = grid.synthesize();
                black_box(records.len());
            });
        });
    }

    group.finish();
}

fn synthesis_points_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis/points");

    for &side in &GRID_SIDES {
        let grid = GridSynthesis::new(side, side);
        group.throughput(common::elements_throughput(grid.len()));

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let points = grid.points();
                black_box(points.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = synthesis_grid_benches, synthesis_points_benches
}
criterion_main!(benches);
