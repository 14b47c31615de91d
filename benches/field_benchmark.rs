/*
 * Point Cloud Benchmark
 *
 * This file contains benchmarks for the animation core to identify
 * performance bottlenecks. It measures the per-frame step of the particle
 * field and the proximity-graph rebuild, with and without the spatial grid.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use plexus::field::ParticleField;
use plexus::params::SimulationParams;
use plexus::proximity::ProximityGraph;

fn bench_params(num_points: usize) -> SimulationParams {
    let mut params = SimulationParams::default();
    params.num_points = num_points;
    params.seed = Some(42);
    params
}

// Benchmark the per-frame field step
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_step");

    for num_points in [15, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_points), num_points, |b, &n| {
            let mut field = ParticleField::new(&bench_params(n));

            b.iter(|| {
                field.step();
                black_box(&field.spheres);
            });
        });
    }

    group.finish();
}

// Benchmark the pairwise proximity rebuild
fn bench_rebuild_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_pairwise");

    for num_points in [15, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_points), num_points, |b, &n| {
            let params = bench_params(n);
            let field = ParticleField::new(&params);
            let mut graph = ProximityGraph::new(&params);

            b.iter(|| black_box(graph.rebuild(&field.spheres).len()));
        });
    }

    group.finish();
}

// Benchmark the grid-accelerated rebuild for comparison
fn bench_rebuild_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_grid");

    for num_points in [15, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_points), num_points, |b, &n| {
            let mut params = bench_params(n);
            params.enable_spatial_grid = true;
            let field = ParticleField::new(&params);
            let mut graph = ProximityGraph::new(&params);

            b.iter(|| black_box(graph.rebuild(&field.spheres).len()));
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step, bench_rebuild_pairwise, bench_rebuild_grid
}

criterion_main!(benches);
