//! Axis-aligned rectangle.
//!
//! Used for bounding boxes (polygon extents, per-floor summaries) and as the
//! drawn outline of rectangular rooms.  Stored as `min`/`max` corners; the
//! constructors normalise ordering so both corners can be trusted.

use crate::vec2::Vec2;

/// Axis-aligned rectangle with `min.x <= max.x` and `min.y <= max.y`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle spanning two arbitrary corners (order-insensitive).
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Rectangle centered on `center` with the given half extents.
    pub fn from_center(center: Vec2, half_x: f64, half_y: f64) -> Self {
        Self {
            min: Vec2::new(center.x - half_x, center.y - half_y),
            max: Vec2::new(center.x + half_x, center.y + half_y),
        }
    }

    /// Bounding box of a point set.  `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Rect { min: first, max: first };
        for p in iter {
            bbox = bbox.union_point(p);
        }
        Some(bbox)
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    #[inline]
    pub fn area(self) -> f64 {
        self.width() * self.height()
    }

    /// Corners in counter-clockwise order starting at `min`.
    pub fn corners(self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(self, other: Rect) -> Rect {
        Rect {
            min: Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Smallest rectangle covering `self` and the point `p`.
    pub fn union_point(self, p: Vec2) -> Rect {
        Rect {
            min: Vec2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Vec2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Grow (or shrink, with negative `margin`) by the same amount on all sides.
    pub fn expand(self, margin: f64) -> Rect {
        Rect {
            min: Vec2::new(self.min.x - margin, self.min.y - margin),
            max: Vec2::new(self.max.x + margin, self.max.y + margin),
        }
    }
}
