//! `sp-subdiv` — recursive boundary subdivision for `spacepack`.
//!
//! Splits a closed site boundary into rooms with straight axis-aligned cuts.
//! Each [`SplitStep`] names an axis and a fraction of the target piece's
//! bounding box; [`subdivide`] applies a step list breadth-first, so `k`
//! steps always yield `k + 1` closed pieces.
//!
//! Non-convex pieces are handled: a cut that would shatter a piece into more
//! than two fragments is shortened to the chord between two of its crossings
//! so every split stays two-piece (see [`splitter`]).
//!
//! # Quick-start
//!
//! ```rust
//! use sp_core::Vec2;
//! use sp_geom::Polygon;
//! use sp_subdiv::{Axis, SplitStep, subdivide};
//!
//! # fn main() -> Result<(), sp_subdiv::SubdivError> {
//! let site = Polygon::new(vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(8.0, 0.0),
//!     Vec2::new(8.0, 6.0),
//!     Vec2::new(0.0, 6.0),
//! ])?;
//!
//! let steps = [SplitStep::new(Axis::X, 0.5), SplitStep::new(Axis::Y, 0.5)];
//! let rooms = subdivide(&site, &steps)?;
//! assert_eq!(rooms.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod splitter;


pub use error::{SubdivError, SubdivResult};
pub use splitter::{Axis, SplitStep, split, subdivide};
