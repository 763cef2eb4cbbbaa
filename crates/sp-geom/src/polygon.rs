//! Implicitly closed polygons.
//!
//! A `Polygon` stores its vertex loop without a duplicate closing vertex; the
//! edge from the last vertex back to the first is implied.  That convention
//! makes cut-and-close operations cheap: any vertex walk that starts and ends
//! on the boundary is automatically sealed by its first-to-last chord.
//!
//! Positions along the boundary are addressed by a *param* in `[0, n)` where
//! `n` is the vertex count: the integer part selects an edge, the fraction a
//! point along it (so param `2.5` is the midpoint of edge 2).  This is the
//! curve-parameter convention the splitting logic sorts and pairs by.

use sp_core::{Rect, Vec2};

use crate::TOL;
use crate::error::{GeomError, GeomResult};
use crate::segment::Segment;

/// A closed polygon with at least 3 distinct vertices.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    verts: Vec<Vec2>,
}

/// An intersection between a probe segment and the polygon boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolyHit {
    pub point: Vec2,
    /// Boundary param in `[0, n)` (edge index plus fraction).
    pub param: f64,
    /// Parameter on the probe segment, in `[0, 1]`.
    pub t: f64,
}

impl Polygon {
    /// Build a polygon from a vertex loop.
    ///
    /// Consecutive near-duplicate vertices (within [`TOL`]) are merged and an
    /// explicit closing vertex equal to the first is dropped, so both open
    /// and closed polyline conventions are accepted.
    pub fn new(verts: Vec<Vec2>) -> GeomResult<Self> {
        let mut cleaned: Vec<Vec2> = Vec::with_capacity(verts.len());
        for v in verts {
            if cleaned.last().is_none_or(|last| last.distance(v) > TOL) {
                cleaned.push(v);
            }
        }
        if cleaned.len() > 1 && cleaned[0].distance(cleaned[cleaned.len() - 1]) <= TOL {
            cleaned.pop();
        }
        if cleaned.len() < 3 {
            return Err(GeomError::TooFewVertices { got: cleaned.len() });
        }
        Ok(Self { verts: cleaned })
    }

    /// The four corners of `rect` as a polygon.
    pub fn rectangle(rect: Rect) -> Self {
        // A rect has positive extent on both axes, so the corner loop is
        // always a valid polygon.
        Self { verts: rect.corners().to_vec() }
    }

    #[inline]
    pub fn verts(&self) -> &[Vec2] {
        &self.verts
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Edge `i`, from vertex `i` to vertex `i + 1` (wrapping).
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        Segment::new(self.verts[i], self.verts[(i + 1) % self.verts.len()])
    }

    /// All edges in order.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.verts.len()).map(|i| self.edge(i))
    }

    /// Axis-aligned bounding box.
    pub fn bbox(&self) -> Rect {
        // verts is never empty, so from_points always yields a box
        Rect::from_points(self.verts.iter().copied()).unwrap_or(Rect::new(Vec2::ZERO, Vec2::ZERO))
    }

    /// Shoelace area with sign: positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        let n = self.verts.len();
        let mut area = 0.0;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[(i + 1) % n];
            area += a.x * b.y - b.x * a.y;
        }
        area * 0.5
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid, falling back to the vertex average for
    /// near-zero-area loops.
    pub fn centroid(&self) -> Vec2 {
        let n = self.verts.len();
        let mut signed_area = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[(i + 1) % n];
            let cross = a.x * b.y - b.x * a.y;
            signed_area += cross;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }
        signed_area *= 0.5;
        if signed_area.abs() > TOL {
            Vec2::new(cx / (6.0 * signed_area), cy / (6.0 * signed_area))
        } else {
            let sum = self.verts.iter().fold(Vec2::ZERO, |acc, v| acc + *v);
            sum * (1.0 / n as f64)
        }
    }

    /// Winding-number containment test (handles concave polygons).
    pub fn contains(&self, p: Vec2) -> bool {
        let n = self.verts.len();
        let mut winding: i32 = 0;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[(i + 1) % n];
            if a.y <= p.y {
                if b.y > p.y {
                    // upward crossing
                    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
                    if cross > 0.0 {
                        winding += 1;
                    }
                }
            } else if b.y <= p.y {
                // downward crossing
                let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
                if cross < 0.0 {
                    winding -= 1;
                }
            }
        }
        winding != 0
    }

    /// Closest point on the boundary to `p`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let mut best = self.verts[0];
        let mut best_d = f64::INFINITY;
        for edge in self.edges() {
            let candidate = edge.closest_point(p);
            let d = (candidate - p).length_squared();
            if d < best_d {
                best_d = d;
                best = candidate;
            }
        }
        best
    }

    /// Point at boundary `param` (edge index plus fraction, wrapping).
    pub fn point_at(&self, param: f64) -> Vec2 {
        let n = self.verts.len();
        let param = param.rem_euclid(n as f64);
        let i = (param.floor() as usize).min(n - 1);
        self.edge(i).point_at(param - i as f64)
    }

    /// All intersections of `probe` with the boundary, sorted by boundary
    /// param.  Hits landing on a shared vertex of two edges are reported
    /// once.
    pub fn intersections_with(&self, probe: Segment) -> Vec<PolyHit> {
        let mut hits: Vec<PolyHit> = Vec::new();
        for (i, edge) in self.edges().enumerate() {
            if let Some(hit) = edge.intersect(probe) {
                hits.push(PolyHit {
                    point: hit.point,
                    param: i as f64 + hit.t_self.clamp(0.0, 1.0),
                    t: hit.t_other.clamp(0.0, 1.0),
                });
            }
        }
        hits.sort_by(|a, b| a.param.total_cmp(&b.param));
        hits.dedup_by(|a, b| a.point.distance(b.point) <= TOL);
        // a vertex-0 contact shows up at both ends of the param range
        if hits.len() > 1 && hits[0].point.distance(hits[hits.len() - 1].point) <= TOL {
            hits.pop();
        }
        hits
    }

    /// Split the boundary at two params into two closed pieces.
    ///
    /// Each piece walks the boundary between the cut points; the implicit
    /// last-to-first edge of the piece is the cut chord, so both pieces come
    /// back sealed.  Fails with [`GeomError::DegenerateCut`] when a piece
    /// collapses below 3 distinct vertices (params too close together).
    pub fn split_at(&self, p0: f64, p1: f64) -> GeomResult<(Polygon, Polygon)> {
        let n = self.verts.len();
        let nf = n as f64;
        let lo = p0.rem_euclid(nf).min(p1.rem_euclid(nf));
        let hi = p0.rem_euclid(nf).max(p1.rem_euclid(nf));

        // forward walk lo → hi
        let mut a = vec![self.point_at(lo)];
        let mut i = lo.floor() as usize + 1;
        while (i as f64) < hi {
            a.push(self.verts[i % n]);
            i += 1;
        }
        a.push(self.point_at(hi));

        // wrapping walk hi → lo
        let mut b = vec![self.point_at(hi)];
        let mut i = hi.floor() as usize + 1;
        while (i as f64) < lo + nf {
            b.push(self.verts[i % n]);
            i += 1;
        }
        b.push(self.point_at(lo));

        let a = Polygon::new(a).map_err(|_| GeomError::DegenerateCut)?;
        let b = Polygon::new(b).map_err(|_| GeomError::DegenerateCut)?;
        Ok((a, b))
    }
}
