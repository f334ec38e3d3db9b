// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collect the quadrant outlines a renderer would draw for a random point cloud.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p quadrant_demos --example quadtree_outlines`

use kurbo::Rect;
use quadrant::{QuadTree, Region};
use rand::Rng;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const CAPACITY: usize = 16;
const COUNT: usize = 2_000;

fn main() {
    env_logger::init();

    let world = Region::new(WIDTH / 2.0, HEIGHT / 2.0, WIDTH / 2.0, HEIGHT / 2.0).unwrap();
    let mut tree = QuadTree::new(CAPACITY, world).unwrap();

    let mut rng = rand::rng();
    for _ in 0..COUNT {
        // Whole pixels, like mouse positions.
        let x = rng.random_range(0..WIDTH as u32);
        let y = rng.random_range(0..HEIGHT as u32);
        tree.insert((f64::from(x), f64::from(y)));
    }

    let mut outlines: Vec<Rect> = Vec::new();
    let mut leaves = 0;
    tree.visit(|node| {
        outlines.push(Rect::from(*node.boundary()));
        if node.is_leaf() {
            leaves += 1;
        }
    });
    log::info!("{} outlines, {} of them leaves", outlines.len(), leaves);
    for rect in outlines.iter().take(8) {
        println!(
            "outline x={:.1} y={:.1} w={:.1} h={:.1}",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height()
        );
    }
    println!("stats: {:?}", tree.stats());
}
