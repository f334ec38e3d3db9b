// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrant::{Point, QuadTree, QuadTreeConfig, Region};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, w: f64, h: f64) -> Vec<Point<f64>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * w, rng.next_f64() * h))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((
            100.0 + rng.next_f64() * 1800.0,
            100.0 + rng.next_f64() * 1800.0,
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn gen_pixel_points(count: usize, w: i32, h: i32) -> Vec<Point<i32>> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            let x = (rng.next_f64() * w as f64) as i32;
            let y = (rng.next_f64() * h as f64) as i32;
            Point::new(x, y)
        })
        .collect()
}

fn world_f64() -> Region<f64> {
    Region::new(1000.0, 1000.0, 1000.0, 1000.0).unwrap()
}

fn bench_build_query_by_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_f64_build_query");
    let points = gen_random_points(16_384, 2000.0, 2000.0);
    let query = Region::new(1000.0, 1000.0, 50.0, 50.0).unwrap();
    group.throughput(Throughput::Elements(points.len() as u64));
    for &capacity in &[1usize, 4, 16, 64] {
        group.bench_function(format!("capacity{}", capacity), |b| {
            b.iter_batched(
                || QuadTree::new(capacity, world_f64()).unwrap(),
                |mut tree| {
                    let _ = tree.extend(points.iter().copied());
                    let hits = tree.query_count(&query);
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_f64_query");
    let points = gen_random_points(65_536, 2000.0, 2000.0);
    let mut tree = QuadTree::new(16, world_f64()).unwrap();
    let _ = tree.extend(points.iter().copied());
    for &half in &[10.0f64, 50.0, 200.0] {
        let query = Region::new(700.0, 1300.0, half, half).unwrap();
        group.bench_function(format!("tree_half{}", half), |b| {
            b.iter(|| black_box(tree.query(&query).len()));
        });
        group.bench_function(format!("linear_scan_half{}", half), |b| {
            b.iter(|| black_box(points.iter().filter(|p| query.contains(**p)).count()));
        });
    }
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_f64_clustered");
    let points = gen_clustered_points(16, 1024, 40.0);
    let query = Region::new(1000.0, 1000.0, 400.0, 400.0).unwrap();
    group.throughput(Throughput::Elements(points.len() as u64));
    for &max_depth in &[8usize, 16, 32] {
        let config = QuadTreeConfig::new(8).with_max_depth(max_depth);
        group.bench_function(format!("max_depth{}", max_depth), |b| {
            b.iter_batched(
                || QuadTree::with_config(world_f64(), config).unwrap(),
                |mut tree| {
                    let _ = tree.extend(points.iter().copied());
                    black_box(tree.query_count(&query));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_pixels_i32(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_i32_pixels");
    let points = gen_pixel_points(20_000, 800, 600);
    let world = Region::new(400, 300, 400, 300).unwrap();
    // A 100×100 cursor box, swept across the screen.
    let cursors: Vec<Region<i32>> = (0..16)
        .map(|i| Region::new(50 * i, 300, 50, 50).unwrap())
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("build_sweep_capacity16", |b| {
        b.iter_batched(
            || QuadTree::new(16, world).unwrap(),
            |mut tree| {
                let _ = tree.extend(points.iter().copied());
                let hits: usize = cursors.iter().map(|c| tree.query_count(c)).sum();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_query_by_capacity,
    bench_query_only,
    bench_clustered,
    bench_pixels_i32
);
criterion_main!(benches);
