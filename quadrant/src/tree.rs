// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point quadtree: leaves hold up to `capacity` points and split into four quadrants on overflow.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::config::QuadTreeConfig;
use crate::error::QuadTreeError;
use crate::region::Region;
use crate::types::{Point, Scalar};

/// A quadtree node and, recursively, the subtree below it.
///
/// A node is either a leaf storing points directly or an internal node owning four
/// children whose regions partition its own (see [`Quadrant`](crate::Quadrant) for the
/// child order). Leaves become internal once they hold more than `capacity` points;
/// the transition never reverses.
///
/// Overflowing leaves only split while they are shallower than
/// [`QuadTreeConfig::max_depth`] and their region can still be bisected. Past that
/// point a leaf is *saturated* and keeps every further point itself, which bounds the
/// tree's depth even when many points coincide.
pub struct QuadTree<T> {
    boundary: Region<T>,
    config: QuadTreeConfig,
    depth: usize,
    inserted: usize,
    node: Node<T>,
}

enum Node<T> {
    Leaf(Vec<Point<T>>),
    Internal(Box<[QuadTree<T>; 4]>),
}

/// Shape summary of a subtree, as returned by [`QuadTree::stats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QuadTreeStats {
    /// Total number of nodes, internal and leaf.
    pub node_count: usize,
    /// Number of leaf nodes.
    pub leaf_count: usize,
    /// Number of points stored across all leaves.
    pub point_count: usize,
    /// Deepest leaf, relative to the subtree root.
    pub max_depth: usize,
    /// Leaves holding more than `capacity` points because they could not split.
    pub saturated_leaves: usize,
}

impl<T: Scalar> QuadTree<T> {
    /// Create an empty tree over `boundary` whose leaves hold up to `capacity` points.
    ///
    /// ```
    /// use quadrant::{QuadTree, QuadTreeError, Region};
    ///
    /// let world = Region::new(400, 300, 400, 300).unwrap();
    /// let tree = QuadTree::new(16, world).unwrap();
    /// assert!(tree.is_leaf());
    /// assert_eq!(QuadTree::new(0, world).unwrap_err(), QuadTreeError::ZeroCapacity);
    /// ```
    pub fn new(capacity: usize, boundary: Region<T>) -> Result<Self, QuadTreeError> {
        Self::with_config(boundary, QuadTreeConfig::new(capacity))
    }

    /// Create an empty tree over `boundary` with explicit configuration.
    pub fn with_config(boundary: Region<T>, config: QuadTreeConfig) -> Result<Self, QuadTreeError> {
        if config.capacity == 0 {
            return Err(QuadTreeError::ZeroCapacity);
        }
        Ok(Self::leaf(boundary, config, 0))
    }

    fn leaf(boundary: Region<T>, config: QuadTreeConfig, depth: usize) -> Self {
        Self {
            boundary,
            config,
            depth,
            inserted: 0,
            node: Node::Leaf(Vec::new()),
        }
    }

    /// Insert a point.
    ///
    /// Returns `false`, leaving the tree untouched, if the point lies outside this
    /// node's boundary. Equal points are stored once per call; no deduplication happens.
    ///
    /// # Panics
    ///
    /// Panics if no child of an internal node accepts a point its parent contains,
    /// which would mean the quadrant partition itself is broken.
    pub fn insert(&mut self, point: impl Into<Point<T>>) -> bool {
        let point = point.into();
        if !self.boundary.contains(point) {
            return false;
        }
        self.inserted += 1;

        let overflowed = match &mut self.node {
            Node::Internal(children) => {
                route(children, &self.boundary, point);
                false
            }
            Node::Leaf(points) => {
                points.push(point);
                points.len() > self.config.capacity
            }
        };
        if overflowed {
            self.overflow();
        }
        true
    }

    /// Insert every point, returning how many were accepted.
    pub fn extend<P, I>(&mut self, points: I) -> usize
    where
        P: Into<Point<T>>,
        I: IntoIterator<Item = P>,
    {
        points
            .into_iter()
            .map(|p| self.insert(p))
            .filter(|&accepted| accepted)
            .count()
    }

    fn overflow(&mut self) {
        if self.depth < self.config.max_depth && self.boundary.can_subdivide() {
            self.divide();
        } else if self.points().len() == self.config.capacity + 1 {
            log::debug!(
                "leaf {:?} at depth {} cannot subdivide; accepting points beyond capacity {}",
                self.boundary,
                self.depth,
                self.config.capacity
            );
        }
    }

    /// Turn this leaf into an internal node and push its points down one level.
    fn divide(&mut self) {
        let config = self.config;
        let depth = self.depth + 1;
        let mut children = Box::new(
            self.boundary
                .quadrants()
                .map(|boundary| Self::leaf(boundary, config, depth)),
        );
        let points = match &mut self.node {
            Node::Leaf(points) => core::mem::take(points),
            Node::Internal(_) => unreachable!("only leaves subdivide"),
        };
        log::trace!(
            "subdividing {:?} at depth {} ({} points)",
            self.boundary,
            self.depth,
            points.len()
        );
        for point in points {
            route(&mut children, &self.boundary, point);
        }
        self.node = Node::Internal(children);
    }

    /// All stored points contained in `bound`.
    ///
    /// Subtrees whose boundary does not touch `bound` are skipped entirely; leaf points
    /// are then filtered with the exact half-open containment test. Results come in
    /// child order (NE, NW, SW, SE) and keep duplicates.
    pub fn query(&self, bound: &Region<T>) -> Vec<Point<T>> {
        let mut out = Vec::new();
        self.for_each_in(bound, |p| out.push(p));
        out
    }

    /// Number of stored points contained in `bound`, without collecting them.
    pub fn query_count(&self, bound: &Region<T>) -> usize {
        let mut n = 0;
        self.for_each_in(bound, |_| n += 1);
        n
    }

    fn for_each_in(&self, bound: &Region<T>, mut f: impl FnMut(Point<T>)) {
        let mut stack = vec![self];
        while let Some(n) = stack.pop() {
            if !n.boundary.intersects(bound) {
                continue;
            }
            match &n.node {
                Node::Leaf(points) => {
                    for p in points {
                        if bound.contains(*p) {
                            f(*p);
                        }
                    }
                }
                // Reversed so children pop in NE, NW, SW, SE order.
                Node::Internal(children) => stack.extend(children.iter().rev()),
            }
        }
    }

    /// The leaf whose region contains `point`, or `None` if it is out of bounds.
    pub fn locate(&self, point: impl Into<Point<T>>) -> Option<&Self> {
        let point = point.into();
        if !self.boundary.contains(point) {
            return None;
        }
        let mut node = self;
        while let Node::Internal(children) = &node.node {
            node = children.iter().find(|c| c.boundary.contains(point))?;
        }
        Some(node)
    }

    /// Visit this node and all descendants in pre-order, children in NE, NW, SW, SE order.
    ///
    /// This is the walk a renderer uses to draw quadrant outlines.
    pub fn visit(&self, mut f: impl FnMut(&Self)) {
        let mut stack = vec![self];
        while let Some(n) = stack.pop() {
            f(n);
            if let Node::Internal(children) = &n.node {
                stack.extend(children.iter().rev());
            }
        }
    }

    /// Summarize the shape of this subtree.
    pub fn stats(&self) -> QuadTreeStats {
        let mut stats = QuadTreeStats::default();
        self.visit(|n| {
            stats.node_count += 1;
            stats.max_depth = stats.max_depth.max(n.depth - self.depth);
            if let Node::Leaf(points) = &n.node {
                stats.leaf_count += 1;
                stats.point_count += points.len();
                if points.len() > n.config.capacity {
                    stats.saturated_leaves += 1;
                }
            }
        });
        stats
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        let mut n = 0;
        self.visit(|node| n += node.points().len());
        n
    }

    /// Whether this subtree stores no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> QuadTree<T> {
    /// Region covered by this node.
    pub fn boundary(&self) -> &Region<T> {
        &self.boundary
    }

    /// Configuration shared by the whole tree.
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Maximum points a leaf holds before subdividing.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Distance from the root (the root is at depth 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node stores points directly.
    pub fn is_leaf(&self) -> bool {
        matches!(self.node, Node::Leaf(_))
    }

    /// The four children of an internal node, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.node {
            Node::Internal(children) => Some(&**children),
            Node::Leaf(_) => None,
        }
    }

    /// Points stored directly in this node, in insertion order. Empty for internal nodes.
    pub fn points(&self) -> &[Point<T>] {
        match &self.node {
            Node::Leaf(points) => points.as_slice(),
            Node::Internal(_) => &[],
        }
    }

    /// How many inserts this node has accepted, counting points pushed down during
    /// subdivision. Diagnostic only.
    pub fn inserted(&self) -> usize {
        self.inserted
    }
}

fn route<T: Scalar>(children: &mut [QuadTree<T>; 4], boundary: &Region<T>, point: Point<T>) {
    let accepted = children.iter_mut().any(|child| child.insert(point));
    assert!(
        accepted,
        "no quadrant of {boundary:?} accepted contained point {point:?}"
    );
}

impl<T: Debug> Debug for QuadTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let stored = match &self.node {
            Node::Leaf(points) => points.len(),
            Node::Internal(_) => 0,
        };
        f.debug_struct("QuadTree")
            .field("boundary", &self.boundary)
            .field("capacity", &self.config.capacity)
            .field("depth", &self.depth)
            .field("leaf", &matches!(self.node, Node::Leaf(_)))
            .field("stored", &stored)
            .field("inserted", &self.inserted)
            .finish_non_exhaustive()
    }
}
