// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors for regions and trees.

use core::fmt;

use thiserror::Error;

/// A coordinate axis, used to report which side of a region is malformed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors produced when building a [`Region`](crate::Region).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RegionError {
    /// A half-extent was negative (or NaN).
    #[error("half-extent on the {axis} axis must be non-negative")]
    NegativeHalfExtent {
        /// The offending axis.
        axis: Axis,
    },
    /// A minimum edge lies after its maximum edge (or an edge is NaN).
    #[error("minimum edge on the {axis} axis lies after the maximum edge")]
    Inverted {
        /// The offending axis.
        axis: Axis,
    },
    /// `center ± half-extent` does not fit in the scalar type.
    #[error("edges on the {axis} axis overflow the scalar range")]
    Overflow {
        /// The offending axis.
        axis: Axis,
    },
}

/// Errors produced when building a [`QuadTree`](crate::QuadTree).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum QuadTreeError {
    /// Leaf capacity must be at least one point.
    #[error("leaf capacity must be at least 1")]
    ZeroCapacity,
}
