//! The `LayoutWriter` trait implemented by output backends.

use crate::{OutputResult, RoomRow, SnapshotRow, TraceRow};

/// Trait implemented by run-output writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`RelaxOutputObserver::take_error`][crate::RelaxOutputObserver::take_error].
pub trait LayoutWriter {
    /// Write the final room placements.
    fn write_layout(&mut self, rows: &[RoomRow]) -> OutputResult<()>;

    /// Write one sweep-displacement trace row.
    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Write a batch of mid-run position snapshots.
    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
