//! `RelaxOutputObserver<W>` — bridges `RelaxObserver` to a `LayoutWriter`.

use sp_agent::AgentStore;
use sp_relax::{RelaxObserver, RelaxOutcome};

use crate::OutputError;
use crate::row::{RoomRow, SnapshotRow, TraceRow};
use crate::writer::LayoutWriter;

/// A [`RelaxObserver`] that writes the displacement trace, position
/// snapshots, and final layout to any [`LayoutWriter`] backend.
///
/// Errors from the writer are stored internally because `RelaxObserver`
/// methods have no return value.  After `engine.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct RelaxOutputObserver<W: LayoutWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: LayoutWriter> RelaxOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `engine.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: LayoutWriter> RelaxObserver for RelaxOutputObserver<W> {
    fn on_iter_end(&mut self, iteration: u32, moved: f64) {
        let result = self.writer.write_trace(&TraceRow { iteration, moved });
        self.store_err(result);
    }

    fn on_snapshot(&mut self, iteration: u32, store: &AgentStore) {
        let rows = SnapshotRow::from_store(iteration, store);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_relax_end(&mut self, _outcome: &RelaxOutcome, store: &AgentStore) {
        let result = self.writer.write_layout(&RoomRow::from_store(store));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
