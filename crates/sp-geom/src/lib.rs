//! `sp-geom` — closed-polygon and segment math for `spacepack`.
//!
//! The relaxation loop needs very little geometry: a closed boundary curve to
//! entice agents toward, and straight cuts for subdividing a boundary into
//! rooms.  This crate provides exactly that — polylines treated as implicitly
//! closed polygons, plus segment intersection.  It is not a geometry kernel;
//! arcs, offsets, and booleans are out of scope.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`segment`] | `Segment`, `SegmentHit` (segment-segment intersection)    |
//! | [`polygon`] | `Polygon` (closed), `PolyHit`, param addressing, splitting|
//! | [`error`]   | `GeomError`, `GeomResult<T>`                              |

pub mod error;
pub mod polygon;
pub mod segment;

#[cfg(test)]
mod tests;

/// Coordinate tolerance for intersection, containment, and dedup tests.
///
/// Looser than [`sp_core::EPS`]: intersection points are computed, not given,
/// and accumulate rounding on the order of 1e-10 per operation at drawing
/// scale.
pub const TOL: f64 = 1e-6;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeomError, GeomResult};
pub use polygon::{PolyHit, Polygon};
pub use segment::{Segment, SegmentHit};
