//! Geometric primitives: integer points and axis-aligned rectangles.

use std::ops::Range;

/// A two-dimensional point with integer coordinates.
///
/// Points are sorted by `x` and then by `y`, for the convenience of our sweep-line
/// algorithm (which moves in increasing `x`).
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    ///
    /// Although it isn't important for functionality, the documentation and
    /// method naming assumes that larger values are up.
    pub y: i32,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// The coordinate-wise minimum of two points.
    pub fn min_coords(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// The coordinate-wise maximum of two points.
    pub fn max_coords(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, stored as its bottom-left and top-right corners.
///
/// The corners are normalized on construction, so `bottom_left` is never to
/// the right of or above `top_right`. Rectangles with zero width or zero height
/// are allowed: they cover no area, but they still take part in a sweep.
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Rectangle {
    bottom_left: Point,
    top_right: Point,
}

impl std::fmt::Debug for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}-{:?}", self.bottom_left, self.top_right)
    }
}

impl Rectangle {
    /// Creates the rectangle spanned by two opposite corners.
    ///
    /// The corners can be given in any order: the `x` coordinates and the `y`
    /// coordinates are sorted independently.
    pub fn new(p: impl Into<Point>, q: impl Into<Point>) -> Self {
        let p = p.into();
        let q = q.into();
        Rectangle {
            bottom_left: p.min_coords(q),
            top_right: p.max_coords(q),
        }
    }

    /// Creates a rectangle from a record of four coordinates, `[x0, y0, x1, y1]`.
    pub fn from_coords([x0, y0, x1, y1]: [i32; 4]) -> Self {
        Rectangle::new((x0, y0), (x1, y1))
    }

    /// The corner with the smallest coordinates.
    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    /// The corner with the largest coordinates.
    pub fn top_right(&self) -> Point {
        self.top_right
    }

    /// The horizontal extent, as a half-open range.
    pub fn x_range(&self) -> Range<i32> {
        self.bottom_left.x..self.top_right.x
    }

    /// The vertical extent, as a half-open range.
    pub fn y_range(&self) -> Range<i32> {
        self.bottom_left.y..self.top_right.y
    }

    /// The width. This can be larger than `i32::MAX`.
    pub fn width(&self) -> u64 {
        span(self.bottom_left.x, self.top_right.x)
    }

    /// The height. This can be larger than `i32::MAX`.
    pub fn height(&self) -> u64 {
        span(self.bottom_left.y, self.top_right.y)
    }

    /// The area of this rectangle on its own.
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// Is this rectangle flat (in either direction)?
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns the intersection of two rectangles, if they overlap or touch.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let x0 = self.bottom_left.x.max(other.bottom_left.x);
        let y0 = self.bottom_left.y.max(other.bottom_left.y);
        let x1 = self.top_right.x.min(other.top_right.x);
        let y1 = self.top_right.y.min(other.top_right.y);
        (x0 <= x1 && y0 <= y1).then(|| Rectangle::new((x0, y0), (x1, y1)))
    }
}

impl From<[i32; 4]> for Rectangle {
    fn from(coords: [i32; 4]) -> Self {
        Rectangle::from_coords(coords)
    }
}

impl From<Rectangle> for [i32; 4] {
    fn from(r: Rectangle) -> Self {
        [
            r.bottom_left.x,
            r.bottom_left.y,
            r.top_right.x,
            r.top_right.y,
        ]
    }
}

/// The distance from `lo` to `hi`, which must satisfy `lo <= hi`.
///
/// The difference of two `i32`s doesn't always fit in an `i32`, but it always
/// fits in an `i64` and (because it's non-negative) in a `u64`.
pub(crate) fn span(lo: i32, hi: i32) -> u64 {
    debug_assert!(lo <= hi);
    (i64::from(hi) - i64::from(lo)) as u64
}
