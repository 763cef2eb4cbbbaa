//! The `RelaxEngine` struct and its iteration loop.

use sp_agent::AgentStore;
use sp_core::RelaxConfig;
use sp_geom::Polygon;

use crate::observer::RelaxObserver;
use crate::step::{cluster_pair, collide_pair, entice};

/// How a [`RelaxEngine::run`] call ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RelaxOutcome {
    /// Sweeps completed by this run.
    pub iterations: u32,

    /// Total displacement of the final sweep.
    pub displacement: f64,

    /// `true` when the final sweep fell below `config.threshold` inside the
    /// iteration budget; `false` means the budget ran out first.
    pub converged: bool,
}

/// The relaxation runner.
///
/// Owns the agent store and moves its positions in place, one sweep per
/// iteration:
///
/// 1. **Cluster** — every adjacency edge pulls its two rooms together until
///    their contact radii touch.
/// 2. **Collide** — every overlapping pair pushes apart, more gently than
///    clustering attracts (`config.collide_scale`).
/// 3. **Entice** — with a boundary set, every room drifts toward its closest
///    boundary point.
///
/// Agents on different floors never interact: cross-floor adjacency edges and
/// cross-floor pairs are skipped in every phase.
///
/// Create via [`RelaxBuilder`][crate::RelaxBuilder].
pub struct RelaxEngine {
    /// Step scales, convergence threshold, iteration budget.
    pub config: RelaxConfig,

    /// Agent state (SoA arrays).  Positions mutate; everything else is fixed.
    pub store: AgentStore,

    /// Closed boundary the rooms are enticed toward, if any.
    pub boundary: Option<Polygon>,

    iteration: u32,
}

impl RelaxEngine {
    pub(crate) fn new(config: RelaxConfig, store: AgentStore, boundary: Option<Polygon>) -> Self {
        Self { config, store, boundary, iteration: 0 }
    }

    /// Sweeps performed so far, across all `step`/`run` calls.
    #[inline]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until a sweep's total displacement drops below the threshold or
    /// the iteration budget is spent.
    ///
    /// Calls observer hooks at every iteration boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: RelaxObserver>(&mut self, observer: &mut O) -> RelaxOutcome {
        let mut outcome = RelaxOutcome {
            iterations:   0,
            displacement: 0.0,
            converged:    false,
        };
        while outcome.iterations < self.config.max_iters {
            let moved = self.step();
            outcome.iterations += 1;
            outcome.displacement = moved;

            observer.on_iter_end(self.iteration, moved);
            if self.config.snapshot_interval > 0
                && self.iteration.is_multiple_of(self.config.snapshot_interval)
            {
                observer.on_snapshot(self.iteration, &self.store);
            }

            if moved < self.config.threshold {
                outcome.converged = true;
                break;
            }
        }
        observer.on_relax_end(&outcome, &self.store);
        outcome
    }

    /// Run exactly `n` sweeps, ignoring the threshold and budget.
    ///
    /// Useful for tests and incremental stepping.  Returns the final sweep's
    /// total displacement (0.0 when `n == 0`).  Does not fire `on_relax_end`.
    pub fn run_iters<O: RelaxObserver>(&mut self, n: u32, observer: &mut O) -> f64 {
        let mut moved = 0.0;
        for _ in 0..n {
            moved = self.step();
            observer.on_iter_end(self.iteration, moved);
            if self.config.snapshot_interval > 0
                && self.iteration.is_multiple_of(self.config.snapshot_interval)
            {
                observer.on_snapshot(self.iteration, &self.store);
            }
        }
        moved
    }

    // ── Core sweep ────────────────────────────────────────────────────────

    /// One full sweep: cluster, collide, entice.  Returns the sweep's total
    /// displacement, counting each pair interaction once.
    pub fn step(&mut self) -> f64 {
        let alpha = self.config.alpha;
        let collide_alpha = self.config.collide_alpha();
        let count = self.store.count;
        let mut moved = 0.0;

        // ── Phase 1: cluster over adjacency edges ─────────────────────────
        for i in 0..count {
            let start = self.store.adj_start[i] as usize;
            let end   = self.store.adj_start[i + 1] as usize;
            for e in start..end {
                let j = self.store.adj_to[e].index();
                if i == j || self.store.floors[i] != self.store.floors[j] {
                    continue;
                }
                moved += cluster_pair(
                    &mut self.store.positions,
                    i,
                    j,
                    self.store.footprints[i],
                    self.store.footprints[j],
                    alpha,
                );
            }
        }

        // ── Phase 2: collide over unordered pairs ─────────────────────────
        for i in 0..count {
            for j in (i + 1)..count {
                if self.store.floors[i] != self.store.floors[j] {
                    continue;
                }
                moved += collide_pair(
                    &mut self.store.positions,
                    i,
                    j,
                    self.store.footprints[i],
                    self.store.footprints[j],
                    collide_alpha,
                );
            }
        }

        // ── Phase 3: boundary enticement ──────────────────────────────────
        if let Some(boundary) = &self.boundary {
            for i in 0..count {
                moved += entice(
                    &mut self.store.positions[i],
                    boundary,
                    alpha,
                    self.config.entice_scale,
                );
            }
        }

        self.iteration += 1;
        moved
    }
}
