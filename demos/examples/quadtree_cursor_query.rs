// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless version of the interactive demo: drag a "mouse" across the screen, adding a point
//! at each new position and counting the points under a 100×100 cursor box every frame.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p quadrant_demos --example quadtree_cursor_query`

use std::collections::HashSet;
use std::time::Instant;

use quadrant::{QuadTree, QuadTreeConfig, Region};
use rand::Rng;

const WIDTH: i32 = 800;
const HEIGHT: i32 = 600;
const PREGENERATED: usize = 5_000;
const CURSOR_HALF: i32 = 50;

fn main() {
    env_logger::init();

    let world = Region::new(WIDTH / 2, HEIGHT / 2, WIDTH / 2, HEIGHT / 2).unwrap();
    let mut tree = QuadTree::with_config(world, QuadTreeConfig::default()).unwrap();

    // The tree keeps duplicates, so dedupe before inserting.
    let mut rng = rand::rng();
    let mut seen = HashSet::new();
    for _ in 0..PREGENERATED {
        seen.insert((rng.random_range(0..WIDTH), rng.random_range(0..HEIGHT)));
    }
    tree.extend(seen.iter().copied());
    log::info!("pregenerated {} unique points", seen.len());

    // Drag diagonally from the top-left corner, one frame per step.
    for frame in 0..60 {
        let pos = (frame * 10, frame * 8);
        if seen.insert(pos) && !tree.insert(pos) {
            log::warn!("cursor {pos:?} left the world");
        }

        let start = Instant::now();
        let cursor = Region::new(pos.0, pos.1, CURSOR_HALF, CURSOR_HALF).unwrap();
        let under_cursor = tree.query(&cursor);
        let elapsed = start.elapsed();

        if frame % 10 == 0 {
            println!(
                "frame {frame:2}: cursor {pos:?} covers {} points ({:.3} ms)",
                under_cursor.len(),
                elapsed.as_secs_f64() * 1000.0
            );
        }
    }

    let stats = tree.stats();
    println!(
        "{} points in {} leaves, max depth {}",
        stats.point_count, stats.leaf_count, stats.max_depth
    );
}
