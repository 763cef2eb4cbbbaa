//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `layout.csv` — final room placements
//! - `trace.csv` — total displacement per sweep
//! - `snapshots.csv` — agent positions at snapshot iterations

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::LayoutWriter;
use crate::{OutputResult, RoomRow, SnapshotRow, TraceRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    layout:    Writer<File>,
    trace:     Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut layout = Writer::from_path(dir.join("layout.csv"))?;
        layout.write_record(["agent_id", "name", "shape", "floor", "x", "y", "width", "height"])?;

        let mut trace = Writer::from_path(dir.join("trace.csv"))?;
        trace.write_record(["iteration", "moved"])?;

        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record(["iteration", "agent_id", "x", "y"])?;

        Ok(Self {
            layout,
            trace,
            snapshots,
            finished: false,
        })
    }
}

impl LayoutWriter for CsvWriter {
    fn write_layout(&mut self, rows: &[RoomRow]) -> OutputResult<()> {
        for row in rows {
            self.layout.write_record(&[
                row.agent_id.to_string(),
                row.name.clone(),
                row.shape.clone(),
                row.floor.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.width.to_string(),
                row.height.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.trace.write_record(&[row.iteration.to_string(), row.moved.to_string()])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.iteration.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.layout.flush()?;
        self.trace.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
