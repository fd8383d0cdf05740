//! Axis-aligned rectangles.
//!
//! An AABB is a rectangle that is not rotated, which is exactly what a batched
//! quad or a glyph cell is. Every quad emitted by the batch is built from the
//! corners of one of these.

use std::fmt;

use cgmath::{BaseFloat, BaseNum, Point2, Vector2};

/// A two-dimensional AABB, aka a rectangle.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq)]
pub struct Aabb2<S> {
    /// Minimum point of the AABB.
    pub min: Point2<S>,
    /// Maximum point of the AABB.
    pub max: Point2<S>,
}

impl<S: BaseNum> Aabb2<S> {
    /// Construct a new axis-aligned bounding box from two points.
    #[inline]
    pub fn new(p1: Point2<S>, p2: Point2<S>) -> Aabb2<S> {
        Aabb2 {
            min: Point2::new(min(p1.x, p2.x), min(p1.y, p2.y)),
            max: Point2::new(max(p1.x, p2.x), max(p1.y, p2.y)),
        }
    }

    /// Compute corners, starting from the maximum point and walking counter-clockwise
    /// in a y-up frame: `(max.x, max.y)`, `(min.x, max.y)`, `(min.x, min.y)`, `(max.x, min.y)`.
    #[inline]
    pub fn to_corners(&self) -> [Point2<S>; 4] {
        [
            self.max,
            Point2::new(self.min.x, self.max.y),
            self.min,
            Point2::new(self.max.x, self.min.y),
        ]
    }

    /// Return the dimensions of this AABB.
    #[inline]
    pub fn dim(&self) -> Vector2<S> {
        self.max - self.min
    }
}

impl<S: BaseFloat> Aabb2<S> {
    /// Construct a axis-aligned bounding box centered at `center` with dimensions `size`.
    ///
    /// The size is not normalized, a negative size swaps `min` and `max` along
    /// that axis.
    #[inline]
    pub fn from_center(center: Point2<S>, size: Vector2<S>) -> Aabb2<S> {
        let two = S::one() + S::one();
        let half = Vector2::new(size.x / two, size.y / two);
        Aabb2 {
            min: center - half,
            max: center + half,
        }
    }

    /// Return the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point2<S> {
        let two = S::one() + S::one();
        Point2::new(
            (self.min.x + self.max.x) / two,
            (self.min.y + self.max.y) / two,
        )
    }
}

impl<S: BaseNum> fmt::Debug for Aabb2<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:?} - {:?}]", self.min, self.max)
    }
}

#[inline]
fn min<S: PartialOrd + Copy>(lhs: S, rhs: S) -> S {
    if lhs < rhs {
        lhs
    } else {
        rhs
    }
}

#[inline]
fn max<S: PartialOrd + Copy>(lhs: S, rhs: S) -> S {
    if lhs > rhs {
        lhs
    } else {
        rhs
    }
}
