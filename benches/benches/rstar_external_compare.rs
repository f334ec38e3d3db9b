// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrant::{Point, QuadTree, Region};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * cell + 0.5, y as f64 * cell + 0.5));
        }
    }
    out
}

fn bench_rstar_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare_f64");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let extent = n as f64 * 10.0;
        let world = Region::from_min_max(0.0, 0.0, extent, extent).unwrap();
        let query = Region::from_min_max(100.0, 100.0, 500.0, 500.0).unwrap();
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadrant_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(16, world).unwrap(),
                |mut tree| {
                    let _ = tree.extend(points.iter().copied());
                    let hits = tree.query_count(&query);
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    // rstar envelopes are closed; grid points never sit on the query edge.
                    let aabb = AABB::from_corners(
                        [query.min_x(), query.min_y()],
                        [query.max_x(), query.max_y()],
                    );
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare_f64);
criterion_main!(benches);
