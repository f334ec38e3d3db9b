// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Quadrant: insert points, query a region, and inspect the tree shape.

use quadrant::{QuadTree, Region};

fn main() {
    let world = Region::new(50, 50, 50, 50).unwrap();
    let mut tree = QuadTree::new(1, world).unwrap();
    for p in [(10, 10), (20, 20), (80, 80)] {
        tree.insert(p);
    }
    // Out of bounds: the world is half-open, so x = 100 is outside.
    let rejected = !tree.insert((100, 50));
    println!("(100, 50) rejected: {rejected}");

    let hits = tree.query(&Region::new(25, 25, 25, 25).unwrap());
    println!("hits in top-left quarter: {hits:?}");
    println!("stats: {:?}", tree.stats());
}
