//! Axis-aligned splitting of closed boundaries.
//!
//! A [`SplitStep`] positions a straight cut by a fraction of the piece's
//! bounding box: `x at 0.5` is a vertical cut through the middle of the
//! box, `y at 0.25` a horizontal cut a quarter of the way up.  Cuts are
//! relative to the *piece being cut*, not the root boundary, so a fixed
//! step list adapts to whatever shapes earlier cuts produced.
//!
//! # Non-convex pieces
//!
//! A cut through a non-convex piece can cross the boundary more than twice,
//! which would shatter it into three or more fragments.  [`split`] keeps the
//! two-piece contract instead: it scans consecutive crossing pairs around
//! the boundary (wrapping last-to-first) and uses the first pair whose chord
//! crosses the boundary exactly twice.
//!
//! ```text
//!      ┌───┐   ┌───┐          4 crossings at y = k: the full-width cut
//!      │   │   │   │          would make 3 pieces.  The chord between
//!   k ─┼───┼───┼───┼─         the two right-hand crossings splits off
//!      │   └───┘   │          one prong, leaving two pieces.
//!      └───────────┘
//! ```

use std::collections::VecDeque;
use std::fmt;

use sp_core::{Rect, Vec2};
use sp_geom::{PolyHit, Polygon, Segment};

use crate::error::{SubdivError, SubdivResult};

// ── Cut description ───────────────────────────────────────────────────────────

/// Which bounding box extent a cut's `param` is measured along.
///
/// The cut line itself runs along the *other* axis: an `X` cut is a vertical
/// line, a `Y` cut a horizontal one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// One straight cut: `param` (in `[0, 1]`) positions the cut line along
/// `axis` within the bounding box of the piece being cut.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitStep {
    pub axis:  Axis,
    pub param: f64,
}

impl SplitStep {
    pub fn new(axis: Axis, param: f64) -> Self {
        Self { axis, param }
    }
}

impl fmt::Display for SplitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:.3}", self.axis, self.param)
    }
}

// ── Splitting ─────────────────────────────────────────────────────────────────

/// Split `boundary` into exactly two closed pieces.
///
/// The first piece returned walks the boundary forward from the lower cut
/// param; together the pieces cover the input area.
pub fn split(boundary: &Polygon, step: SplitStep) -> SubdivResult<(Polygon, Polygon)> {
    if !(step.param.is_finite() && (0.0..=1.0).contains(&step.param)) {
        return Err(SubdivError::ParamOutOfRange { step });
    }

    // Extend past the box so crossings that graze the box edge register.
    let probe = cut_line(boundary.bbox(), step).extended(1.0);

    let hits = boundary.intersections_with(probe);
    if hits.len() < 2 {
        return Err(SubdivError::CutMissedBoundary { step, hits: hits.len() });
    }

    let (p0, p1) = if hits.len() == 2 {
        (hits[0].param, hits[1].param)
    } else {
        two_piece_pair(boundary, &hits).ok_or(SubdivError::NoTwoPieceCut { step })?
    };

    Ok(boundary.split_at(p0, p1)?)
}

/// Split `boundary` recursively, front of the queue first.
///
/// Each step pops the oldest piece, splits it, and pushes both halves to the
/// back, so `k` steps produce `k + 1` pieces and the cuts cycle through the
/// pieces breadth-first rather than carving up a single corner.
pub fn subdivide(boundary: &Polygon, steps: &[SplitStep]) -> SubdivResult<Vec<Polygon>> {
    let mut queue: VecDeque<Polygon> = VecDeque::with_capacity(steps.len() + 1);
    queue.push_back(boundary.clone());
    for &step in steps {
        // Never empty: every pass pops one piece and pushes two.
        let Some(piece) = queue.pop_front() else { break };
        let (a, b) = split(&piece, step)?;
        queue.push_back(a);
        queue.push_back(b);
    }
    Ok(queue.into())
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// The cut segment for `step` across `bbox`, before extension.
fn cut_line(bbox: Rect, step: SplitStep) -> Segment {
    match step.axis {
        Axis::X => {
            let x = bbox.min.x + bbox.width() * step.param;
            Segment::new(Vec2::new(x, bbox.min.y), Vec2::new(x, bbox.max.y))
        }
        Axis::Y => {
            let y = bbox.min.y + bbox.height() * step.param;
            Segment::new(Vec2::new(bbox.min.x, y), Vec2::new(bbox.max.x, y))
        }
    }
}

/// Among 3+ crossings, find a consecutive pair whose connecting chord
/// crosses the boundary exactly twice (its own endpoints), meaning the chord
/// stays inside and the split yields two pieces.  Scans pairs in boundary
/// order starting with the last-to-first wrap.
fn two_piece_pair(boundary: &Polygon, hits: &[PolyHit]) -> Option<(f64, f64)> {
    for i in 0..hits.len() {
        let prev = if i == 0 { hits.len() - 1 } else { i - 1 };
        let chord = Segment::new(hits[prev].point, hits[i].point);
        if boundary.intersections_with(chord).len() == 2 {
            return Some((hits[prev].param, hits[i].param));
        }
    }
    None
}
