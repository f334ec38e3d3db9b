// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction parameters.

/// Parameters shared by every node of a [`QuadTree`](crate::QuadTree).
///
/// All descendants inherit the root's configuration unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTreeConfig {
    /// Maximum points a leaf holds before it subdivides. Must be at least 1.
    pub capacity: usize,
    /// Depth (root = 0) at which leaves stop subdividing and accept points beyond
    /// `capacity` instead.
    pub max_depth: usize,
}

impl QuadTreeConfig {
    /// Default leaf capacity.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Default maximum depth.
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// Create a configuration with the given capacity and the default maximum depth.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the leaf capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replace the maximum depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_defaults() {
        let c = QuadTreeConfig::default();
        assert_eq!(c.capacity, 16);
        assert_eq!(c.max_depth, 32);
        let c = c.with_capacity(4).with_max_depth(3);
        assert_eq!(c, QuadTreeConfig { capacity: 4, max_depth: 3 });
    }
}
