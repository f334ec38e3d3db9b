// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned regions: half-open point containment and closed overlap tests.

use crate::error::{Axis, RegionError};
use crate::types::{Point, Scalar, le, lt, max_t, min_t};

/// One of the four quadrants of a subdivided region.
///
/// Quadrants are named for a top-left origin, so "north" is toward smaller y.
/// The discriminant is the child's position in [`QuadTree::children`](crate::QuadTree::children).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Larger x, smaller y.
    NorthEast = 0,
    /// Smaller x, smaller y.
    NorthWest = 1,
    /// Smaller x, larger y.
    SouthWest = 2,
    /// Larger x, larger y.
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Position of this quadrant among a node's children.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned rectangle covering `[min_x, max_x) × [min_y, max_y)`.
///
/// Usually built from a center and half-extents with [`Region::new`]. The edges are
/// stored directly so that bisection is exact for integer scalars: a child edge is
/// always the parent's midpoint, which keeps the four quadrants an exact partition
/// even when the parent's width is odd.
///
/// Two predicates are deliberately asymmetric:
/// - [`Region::contains`] is half-open and decides which single leaf owns a point.
/// - [`Region::intersects`] is closed and only decides whether a query descends into
///   a subtree, so it may over-include touching regions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Region<T> {
    min_x: T,
    min_y: T,
    max_x: T,
    max_y: T,
}

impl<T: Scalar> Region<T> {
    /// Create a region from its center and half-extents.
    ///
    /// Fails if a half-extent is negative or NaN, if an edge does not fit in `T`, or if
    /// the resulting edges are not ordered (for example a NaN center).
    ///
    /// ```
    /// use quadrant::{Point, Region};
    ///
    /// let r = Region::new(50, 50, 50, 50).unwrap();
    /// assert!(r.contains(Point::new(0, 0)));
    /// assert!(r.contains(Point::new(99, 99)));
    /// assert!(!r.contains(Point::new(100, 50)));
    /// assert!(Region::new(0, 0, -1, 5).is_err());
    /// ```
    pub fn new(
        center_x: T,
        center_y: T,
        half_width: T,
        half_height: T,
    ) -> Result<Self, RegionError> {
        if !le(T::zero(), half_width) {
            return Err(RegionError::NegativeHalfExtent { axis: Axis::X });
        }
        if !le(T::zero(), half_height) {
            return Err(RegionError::NegativeHalfExtent { axis: Axis::Y });
        }
        let overflow = |axis| RegionError::Overflow { axis };
        Self::from_min_max(
            T::checked_sub(center_x, half_width).ok_or(overflow(Axis::X))?,
            T::checked_sub(center_y, half_height).ok_or(overflow(Axis::Y))?,
            T::checked_add(center_x, half_width).ok_or(overflow(Axis::X))?,
            T::checked_add(center_y, half_height).ok_or(overflow(Axis::Y))?,
        )
    }

    /// Create a region from its edges, covering `[min_x, max_x) × [min_y, max_y)`.
    pub fn from_min_max(min_x: T, min_y: T, max_x: T, max_y: T) -> Result<Self, RegionError> {
        if !le(min_x, max_x) {
            return Err(RegionError::Inverted { axis: Axis::X });
        }
        if !le(min_y, max_y) {
            return Err(RegionError::Inverted { axis: Axis::Y });
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Inclusive left edge.
    pub fn min_x(&self) -> T {
        self.min_x
    }

    /// Inclusive top edge.
    pub fn min_y(&self) -> T {
        self.min_y
    }

    /// Exclusive right edge.
    pub fn max_x(&self) -> T {
        self.max_x
    }

    /// Exclusive bottom edge.
    pub fn max_y(&self) -> T {
        self.max_y
    }

    /// Horizontal center (rounded down for integers).
    pub fn center_x(&self) -> T {
        T::mid(self.min_x, self.max_x)
    }

    /// Vertical center (rounded down for integers).
    pub fn center_y(&self) -> T {
        T::mid(self.min_y, self.max_y)
    }

    /// Full width.
    pub fn width(&self) -> T {
        T::sub(self.max_x, self.min_x)
    }

    /// Full height.
    pub fn height(&self) -> T {
        T::sub(self.max_y, self.min_y)
    }

    /// Half of the width (rounded toward zero for integers).
    pub fn half_width(&self) -> T {
        T::halve(self.width())
    }

    /// Half of the height (rounded toward zero for integers).
    pub fn half_height(&self) -> T {
        T::halve(self.height())
    }

    /// Whether the point lies inside this region.
    ///
    /// Lower edges are inclusive and upper edges exclusive, so adjacent regions never
    /// both contain a point. NaN coordinates are never contained.
    pub fn contains(&self, point: Point<T>) -> bool {
        le(self.min_x, point.x)
            && lt(point.x, self.max_x)
            && le(self.min_y, point.y)
            && lt(point.y, self.max_y)
    }

    /// Whether the two regions overlap, treating both as closed rectangles.
    ///
    /// Regions that merely touch along an edge or corner intersect. The test is symmetric.
    pub fn intersects(&self, other: &Self) -> bool {
        le(
            max_t(self.min_x, other.min_x),
            min_t(self.max_x, other.max_x),
        ) && le(
            max_t(self.min_y, other.min_y),
            min_t(self.max_y, other.max_y),
        )
    }

    /// Whether the region has no interior (zero width or height).
    pub fn is_empty(&self) -> bool {
        !lt(self.min_x, self.max_x) || !lt(self.min_y, self.max_y)
    }

    /// Whether bisecting this region yields four strictly smaller regions.
    ///
    /// This is false once either axis is too narrow to split: width below two for
    /// integers, or a midpoint that rounds onto an edge for floats.
    pub fn can_subdivide(&self) -> bool {
        let mx = T::mid(self.min_x, self.max_x);
        let my = T::mid(self.min_y, self.max_y);
        lt(self.min_x, mx) && lt(mx, self.max_x) && lt(self.min_y, my) && lt(my, self.max_y)
    }

    /// The four quadrants of this region in [`Quadrant::ALL`] order.
    ///
    /// Every point contained in `self` is contained in exactly one quadrant.
    pub fn quadrants(&self) -> [Self; 4] {
        let mx = T::mid(self.min_x, self.max_x);
        let my = T::mid(self.min_y, self.max_y);
        [
            Self {
                min_x: mx,
                min_y: self.min_y,
                max_x: self.max_x,
                max_y: my,
            },
            Self {
                min_x: self.min_x,
                min_y: self.min_y,
                max_x: mx,
                max_y: my,
            },
            Self {
                min_x: self.min_x,
                min_y: my,
                max_x: mx,
                max_y: self.max_y,
            },
            Self {
                min_x: mx,
                min_y: my,
                max_x: self.max_x,
                max_y: self.max_y,
            },
        ]
    }

    /// The quadrant of `self` that contains the point, if `self` contains it at all.
    pub fn quadrant_of(&self, point: Point<T>) -> Option<Quadrant> {
        if !self.contains(point) {
            return None;
        }
        let east = le(T::mid(self.min_x, self.max_x), point.x);
        let south = le(T::mid(self.min_y, self.max_y), point.y);
        Some(match (east, south) {
            (true, false) => Quadrant::NorthEast,
            (false, false) => Quadrant::NorthWest,
            (false, true) => Quadrant::SouthWest,
            (true, true) => Quadrant::SouthEast,
        })
    }
}

#[cfg(feature = "kurbo")]
impl From<Region<f64>> for kurbo::Rect {
    fn from(r: Region<f64>) -> Self {
        Self::new(r.min_x, r.min_y, r.max_x, r.max_y)
    }
}

#[cfg(feature = "kurbo")]
impl TryFrom<kurbo::Rect> for Region<f64> {
    type Error = RegionError;

    fn try_from(r: kurbo::Rect) -> Result<Self, Self::Error> {
        Self::from_min_max(r.x0, r.y0, r.x1, r.y1)
    }
}
