//! `sp-output` — run output for the spacepack toolkit.
//!
//! Two backends:
//!
//! | Backend | Entry point     | Files / artifacts                             |
//! |---------|-----------------|-----------------------------------------------|
//! | CSV     | [`CsvWriter`]   | `layout.csv`, `trace.csv`, `snapshots.csv`    |
//! | SVG     | [`SvgRenderer`] | one image string per layout or subdivision    |
//!
//! CSV writing is driven by [`RelaxOutputObserver`], which implements
//! `sp_relax::RelaxObserver` and records the run as it happens; SVG
//! rendering takes a finished store or piece list.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{CsvWriter, RelaxOutputObserver, SvgRenderer};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RelaxOutputObserver::new(writer);
//! let outcome = engine.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! let svg = SvgRenderer::default().render_layout(&engine.store, engine.boundary.as_ref());
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod svg;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RelaxOutputObserver;
pub use row::{RoomRow, SnapshotRow, TraceRow};
pub use svg::SvgRenderer;
pub use writer::LayoutWriter;
