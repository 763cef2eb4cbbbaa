//! Straight line segments.

use sp_core::Vec2;

use crate::TOL;

/// A directed line segment from `a` to `b`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

/// An intersection between two segments, with the parameter on each.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentHit {
    pub point: Vec2,
    /// Parameter on the segment `intersect` was called on, in `[0, 1]`.
    pub t_self: f64,
    /// Parameter on the other segment, in `[0, 1]`.
    pub t_other: f64,
}

impl Segment {
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.a.distance(self.b)
    }

    /// Point at parameter `t` (`0` = `a`, `1` = `b`).
    #[inline]
    pub fn point_at(self, t: f64) -> Vec2 {
        self.a.lerp(self.b, t)
    }

    #[inline]
    pub fn midpoint(self) -> Vec2 {
        self.point_at(0.5)
    }

    /// Extend both ends by `amount` along the segment direction.  A zero
    /// length segment is returned unchanged.
    pub fn extended(self, amount: f64) -> Segment {
        match (self.b - self.a).normalized() {
            Some(dir) => Segment::new(self.a - dir * amount, self.b + dir * amount),
            None => self,
        }
    }

    /// Intersection with another segment, if any.
    ///
    /// Parallel (and collinear) segments report no hit.  Endpoint contacts
    /// within [`TOL`] count as hits, matching how a cut that grazes a vertex
    /// still registers.
    pub fn intersect(self, other: Segment) -> Option<SegmentHit> {
        let d1 = self.b - self.a;
        let d2 = other.b - other.a;

        let denom = d1.x * d2.y - d1.y * d2.x;
        if denom.abs() < TOL * TOL {
            return None;
        }

        let offset = other.a - self.a;
        let t = (offset.x * d2.y - offset.y * d2.x) / denom;
        let u = (offset.x * d1.y - offset.y * d1.x) / denom;

        if t >= -TOL && t <= 1.0 + TOL && u >= -TOL && u <= 1.0 + TOL {
            Some(SegmentHit { point: self.a + d1 * t, t_self: t, t_other: u })
        } else {
            None
        }
    }

    /// Closest point on the segment to `p` (projection clamped to the ends).
    pub fn closest_point(self, p: Vec2) -> Vec2 {
        let d = self.b - self.a;
        let len_sq = d.length_squared();
        if len_sq < TOL * TOL {
            return self.a;
        }
        let t = ((p - self.a).dot(d) / len_sq).clamp(0.0, 1.0);
        self.point_at(t)
    }
}
