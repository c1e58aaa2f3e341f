//! Planar geometry primitives shared by the projections
//!
//! Rectangles are half-open: a `Rect` contains `[x, x + width) × [y, y + height)`.
//! That convention lets a window split at the 360° seam be tiled exactly by
//! its two halves with no shared column.

pub mod affine;
pub mod planar;

pub use affine::AffineTransform;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, in whatever space the caller is working in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Half-open membership test
    pub fn contains(&self, p: &Point2<f64>) -> bool {
        self.contains_x(p.x) && p.y >= self.min_y() && p.y < self.max_y()
    }

    /// Half-open membership test on the x axis only
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.min_x() && x < self.max_x()
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.min_x().min(other.min_x());
        let y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(x, y, max_x - x, max_y - y)
    }
}

/// A world-space area expressed in the canonical [0, 360) copy
///
/// Produced by folding a world window across the longitude seam. A window
/// that straddles 360° becomes two pieces: one ending at 360 and one
/// starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WorldRegion {
    /// The window lies entirely inside one copy of world space
    Single(Rect),
    /// The window crosses the seam; `(east_of_origin, wrapped_remainder)`
    Split(Rect, Rect),
}

impl WorldRegion {
    /// The rectangles making up the region, in ascending x order of the
    /// unwrapped window
    pub fn rects(&self) -> Vec<Rect> {
        match self {
            WorldRegion::Single(r) => vec![*r],
            WorldRegion::Split(a, b) => vec![*a, *b],
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, WorldRegion::Split(..))
    }

    pub fn contains(&self, p: &Point2<f64>) -> bool {
        match self {
            WorldRegion::Single(r) => r.contains(p),
            WorldRegion::Split(a, b) => a.contains(p) || b.contains(p),
        }
    }

    pub fn contains_x(&self, x: f64) -> bool {
        match self {
            WorldRegion::Single(r) => r.contains_x(x),
            WorldRegion::Split(a, b) => a.contains_x(x) || b.contains_x(x),
        }
    }

    /// Bounding rectangle of all pieces
    pub fn bounds(&self) -> Rect {
        match self {
            WorldRegion::Single(r) => *r,
            WorldRegion::Split(a, b) => a.union(b),
        }
    }
}

/// Ordered pair of endpoints in a single coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Segment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Segment { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Segment::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// The same segment with both endpoints shifted by `dx` along x
    pub fn shifted_x(&self, dx: f64) -> Segment {
        Segment::from_coords(self.start.x + dx, self.start.y, self.end.x + dx, self.end.y)
    }

    pub fn midpoint(&self) -> Point2<f64> {
        nalgebra::center(&self.start, &self.end)
    }
}
