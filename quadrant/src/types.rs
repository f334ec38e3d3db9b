// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive scalar and point types shared by regions and the tree.

use core::cmp::Ordering;
use core::fmt::Debug;

/// A point in 2D space.
///
/// The y axis grows downward (top-left origin), which is what the quadrant names
/// in [`Quadrant`](crate::Quadrant) assume.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

/// Numeric scalar abstraction for region geometry.
///
/// This trait provides the handful of operations needed to build regions from
/// centers and half-extents and to bisect them. Integer implementations saturate
/// instead of overflowing, and [`Scalar::mid`] never overflows.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Add two scalar values, or `None` if the sum is not representable.
    ///
    /// Floats always succeed.
    fn checked_add(a: Self, b: Self) -> Option<Self>;

    /// Subtract two scalar values (a - b), or `None` if the difference is not representable.
    ///
    /// Floats always succeed.
    fn checked_sub(a: Self, b: Self) -> Option<Self>;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Midpoint between a and b (the bisection edge of `[a, b)`).
    fn mid(a: Self, b: Self) -> Self;

    /// Half of a value (rounded toward zero for integers).
    fn halve(v: Self) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn add(a: Self, b: Self) -> Self {
                a + b
            }

            #[inline]
            fn sub(a: Self, b: Self) -> Self {
                a - b
            }

            #[inline]
            fn checked_add(a: Self, b: Self) -> Option<Self> {
                Some(a + b)
            }

            #[inline]
            fn checked_sub(a: Self, b: Self) -> Option<Self> {
                Some(a - b)
            }

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn mid(a: Self, b: Self) -> Self {
                0.5 * (a + b)
            }

            #[inline]
            fn halve(v: Self) -> Self {
                0.5 * v
            }
        }
    )*};
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn add(a: Self, b: Self) -> Self {
                a.saturating_add(b)
            }

            #[inline]
            fn sub(a: Self, b: Self) -> Self {
                a.saturating_sub(b)
            }

            #[inline]
            fn checked_add(a: Self, b: Self) -> Option<Self> {
                a.checked_add(b)
            }

            #[inline]
            fn checked_sub(a: Self, b: Self) -> Option<Self> {
                a.checked_sub(b)
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn mid(a: Self, b: Self) -> Self {
                // Average without overflow: (a & b) + ((a ^ b) >> 1)
                (a & b) + ((a ^ b) >> 1)
            }

            #[inline]
            fn halve(v: Self) -> Self {
                v / 2
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i32, i64, u32, u64);

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
