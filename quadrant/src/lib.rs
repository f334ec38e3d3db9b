// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant: a 2D point quadtree with half-open regions and rectangular range queries.
//!
//! - Insert points into a tree covering a fixed world [`Region`].
//! - Query every stored point inside an arbitrary region with [`QuadTree::query`].
//! - Walk the tree with [`QuadTree::visit`] to draw quadrant outlines or gather [`QuadTreeStats`].
//!
//! Leaves hold up to `capacity` points. The insert that pushes a leaf past its capacity
//! splits it into four quadrants (see [`Quadrant`]) and pushes its points down; a quadrant
//! that is still over capacity splits again, one level at a time.
//!
//! It is generic over the scalar type `T` (`i32`, `i64`, `u32`, `u64`, `f32`, `f64`) and does
//! not depend on any geometry crate. With the `kurbo` feature, [`Region<f64>`] converts to and
//! from `kurbo::Rect`.
//!
//! # Example
//!
//! ```rust
//! use quadrant::{Point, QuadTree, Region};
//!
//! // A 100×100 world whose leaves split past one point.
//! let world = Region::new(50, 50, 50, 50).unwrap();
//! let mut tree = QuadTree::new(1, world).unwrap();
//!
//! assert!(tree.insert((10, 10)));
//! assert!(tree.insert((20, 20)));
//! assert!(tree.insert((80, 80)));
//! // Outside the half-open world: rejected, nothing changes.
//! assert!(!tree.insert((100, 50)));
//!
//! let top_left = Region::new(25, 25, 25, 25).unwrap();
//! let mut hits = tree.query(&top_left);
//! hits.sort_by_key(|p| (p.x, p.y));
//! assert_eq!(hits, [Point::new(10, 10), Point::new(20, 20)]);
//! assert_eq!(tree.query_count(&world), 3);
//! ```
//!
//! ## Regions
//!
//! A [`Region`] is built from a center and half-extents and covers
//! `[center - half, center + half)` on each axis. Negative half-extents and edges that do not
//! fit in `T` are rejected with a [`RegionError`]. Point containment is half-open so that the
//! four quadrants of a region partition it exactly; region intersection is closed so queries
//! never skip a quadrant that only touches the query's edge.
//!
//! ## Depth guard
//!
//! Many coincident points would otherwise split a leaf forever. A leaf only splits while it
//! is shallower than [`QuadTreeConfig::max_depth`] and its region can still be bisected;
//! past that it keeps accepting points beyond capacity.
//!
//! ```rust
//! use quadrant::{QuadTree, QuadTreeConfig, Region};
//!
//! let world = Region::new(0.5, 0.5, 0.5, 0.5).unwrap();
//! let config = QuadTreeConfig::new(1).with_max_depth(8);
//! let mut tree = QuadTree::with_config(world, config).unwrap();
//! for _ in 0..100 {
//!     tree.insert((0.25, 0.25));
//! }
//! let stats = tree.stats();
//! assert_eq!(stats.max_depth, 8);
//! assert_eq!(stats.saturated_leaves, 1);
//! ```
//!
//! ### Float semantics
//!
//! Float coordinates are assumed finite. A NaN coordinate is never contained in any region,
//! so inserting it returns `false`.
//!
//! This crate is `no_std` and uses `alloc`. It logs subdivisions through the `log` facade.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod region;
pub mod tree;
pub mod types;

pub use config::QuadTreeConfig;
pub use error::{Axis, QuadTreeError, RegionError};
pub use region::{Quadrant, Region};
pub use tree::{QuadTree, QuadTreeStats};
pub use types::{Point, Scalar};
