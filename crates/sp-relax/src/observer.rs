//! Relaxation observer trait for progress reporting and data collection.

use sp_agent::AgentStore;

use crate::engine::RelaxOutcome;

/// Callbacks invoked by [`RelaxEngine::run`][crate::RelaxEngine::run] at key
/// points in the iteration loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u32 }
///
/// impl RelaxObserver for ProgressPrinter {
///     fn on_iter_end(&mut self, iteration: u32, moved: f64) {
///         if iteration % self.interval == 0 {
///             println!("iteration {iteration}: moved {moved:.4}");
///         }
///     }
/// }
/// ```
pub trait RelaxObserver {
    /// Called at the end of every iteration with that sweep's total
    /// displacement.
    fn on_iter_end(&mut self, _iteration: u32, _moved: f64) {}

    /// Called every `config.snapshot_interval` iterations (never when the
    /// interval is 0) with read access to the whole store, so output writers
    /// can record intermediate positions without the engine knowing about
    /// any particular format.
    fn on_snapshot(&mut self, _iteration: u32, _store: &AgentStore) {}

    /// Called once after the loop stops, whether it converged or ran out of
    /// iterations.
    fn on_relax_end(&mut self, _outcome: &RelaxOutcome, _store: &AgentStore) {}
}

/// A [`RelaxObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl RelaxObserver for NoopObserver {}
